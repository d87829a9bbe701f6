use image::buffer::{Pixels, PixelsMut};
use image::Pixel;
use std::slice::{Iter, IterMut};

/// Row-major mutable access to every color channel of every pixel,
/// in the channel order of the pixel type (R, G, B, A for `Rgba`).
pub struct ColorIterMut<'a, P: Pixel + 'a> {
    pixels: PixelsMut<'a, P>,
    colors: Option<IterMut<'a, P::Subpixel>>,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_pixels(pixels: PixelsMut<'a, P>) -> Self {
        Self {
            pixels,
            colors: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(color);
            }
            self.colors = Some(self.pixels.next()?.channels_mut().iter_mut());
        }
    }
}

/// Row-major readonly access to every color channel of every pixel
pub struct ColorIter<'a, P: Pixel + 'a> {
    pixels: Pixels<'a, P>,
    colors: Option<Iter<'a, P::Subpixel>>,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_pixels(pixels: Pixels<'a, P>) -> Self {
        Self {
            pixels,
            colors: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(color);
            }
            self.colors = Some(self.pixels.next()?.channels().iter());
        }
    }
}
