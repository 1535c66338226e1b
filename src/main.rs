fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelzoom::PpmFilePresenter::new();
    let mut controller = mandelzoom::SnapshotController::new(presenter);

    controller.generate()?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}
