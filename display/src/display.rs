use log::error;
use sdl2::pixels::PixelFormatEnum;

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is held as a 2d array of 32 rows of 64 bools.
/// The display only gets a call to `present` when the machine's screen changes.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    scale: u32,
}

impl Display {
    /// Opens a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let (width, height) = Display::window_size(scale);
        let window = video_subsystem
            .window("Emu-8", width, height)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas, scale })
    }

    fn window_size(scale: u32) -> (u32, u32) {
        (DISPLAY_WIDTH as u32 * scale, DISPLAY_HEIGHT as u32 * scale)
    }

    /// Formats a FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
    /// - Converting each lit pixel to full intensity and each unlit pixel to zero
    /// - Triplicating each intensity to fill the R, G and B channels
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .map(|&lit| if lit { 255 } else { 0 })
            .flat_map(|intensity| std::iter::repeat(intensity).take(3))
            .collect()
    }

    /// Formats the FrameBuffer as an SDL2 RGB24 texture and renders it.
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture
            .update(None, &pixels, DISPLAY_WIDTH * 3)
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    fn rescale(&mut self, scale: u32) -> Result<(), String> {
        let (width, height) = Display::window_size(scale);
        self.canvas
            .window_mut()
            .set_size(width, height)
            .map_err(|e| e.to_string())?;
        self.scale = scale;
        Ok(())
    }
}

impl emu8_core::Display for Display {
    fn present(&mut self, frame: &FrameBuffer, scale: u32) {
        if scale != self.scale {
            if let Err(e) = self.rescale(scale) {
                error!("unable to resize window to scale {}: {}", scale, e);
            }
        }
        if let Err(e) = self.render(frame) {
            error!("unable to render frame: {}", e);
        }
    }
}
