pub mod map_pixel_to_plane;
