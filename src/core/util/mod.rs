pub mod pixel_to_plane;
