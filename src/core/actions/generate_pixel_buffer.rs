use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration::IterationResult;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, OPAQUE_ALPHA, PixelBuffer, PixelBufferData, PixelBufferError,
};

/// Maps iteration results to colours and packs them into an RGBA buffer.
///
/// Streams bytes into a preallocated buffer; alpha is always opaque. Fails
/// only if the result count does not match the dimensions.
pub fn generate_pixel_buffer<M: ColourMap>(
    input: Vec<IterationResult>,
    mapper: &M,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for result in input {
        let Colour { r, g, b } = mapper.map(result);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
        buffer.push(OPAQUE_ALPHA);
    }

    PixelBuffer::from_data(width, height, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    #[derive(Debug)]
    struct StubGreyscale;

    impl ColourMap for StubGreyscale {
        fn map(&self, result: IterationResult) -> Colour {
            let v = result.iterations as u8;
            Colour { r: v, g: v, b: v }
        }

        fn display_name(&self) -> &str {
            "Stub greyscale"
        }
    }

    fn result(iterations: u32) -> IterationResult {
        IterationResult::new(iterations, 255)
    }

    #[test]
    fn test_packs_rgba_row_major() {
        let input = vec![result(1), result(2), result(3), result(4)];

        let buffer = generate_pixel_buffer(input, &StubGreyscale, 2, 2).unwrap();

        let expected: PixelBufferData = vec![
            1, 1, 1, 255, //
            2, 2, 2, 255, //
            3, 3, 3, 255, //
            4, 4, 4, 255,
        ];

        assert_eq!(buffer.buffer(), &expected);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some([4, 4, 4, 255]));
    }

    #[test]
    fn test_input_dimension_mismatch_returns_err() {
        let input = vec![result(1), result(2), result(3)];

        let outcome = generate_pixel_buffer(input, &StubGreyscale, 2, 2);

        assert_eq!(
            outcome,
            Err(PixelBufferError::SizeMismatch {
                expected_size: 16,
                buffer_size: 12
            })
        );
    }

    #[test]
    fn test_alpha_is_always_opaque() {
        let input = vec![result(0); 6];

        let buffer = generate_pixel_buffer(input, &StubGreyscale, 3, 2).unwrap();

        assert!(buffer.buffer().chunks_exact(4).all(|px| px[3] == 255));
    }
}
