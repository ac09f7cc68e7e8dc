use sdl2::pixels::PixelFormatEnum;

use ocho::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

const SCALE: usize = 10;

/// # Screen
/// Renders the machine's 64x32 frame buffer in an SDL2 window, scaled
/// up so the pixels are visible. `render` is only called when the
/// frame buffer actually changed.
pub struct Screen {
    canvas: sdl2::render::WindowCanvas,
}

impl Screen {
    /// Creates a new window bound to an sdl2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "ocho",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .unwrap();
        let canvas = window.into_canvas().build().unwrap();

        Screen { canvas }
    }

    /// Formats a frame buffer for rendering as an SDL2 RGB24 texture.
    ///
    /// Rows are concatenated, each pixel is triplicated into R, G and B
    /// channels, and the 0/1 pixel state becomes 0/255 intensity.
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|pixel| std::iter::repeat(pixel).take(3))
            .map(|pixel| pixel * 255)
            .collect()
    }

    /// Uploads the frame buffer as a texture and presents it.
    pub fn render(&mut self, frame: &FrameBuffer) {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .unwrap();

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Screen::frame_to_texture(frame));
            })
            .unwrap();

        self.canvas.copy(&texture, None, None).unwrap();
        self.canvas.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture() {
        let mut frame: FrameBuffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][0..2].copy_from_slice(&[0, 1]);
        frame[1][0..2].copy_from_slice(&[1, 0]);
        let texture = Screen::frame_to_texture(&frame);

        let mut expected: Vec<u8> = vec![0; DISPLAY_WIDTH * DISPLAY_HEIGHT * 3];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }
}
