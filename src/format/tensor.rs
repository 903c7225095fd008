// src/format/tensor.rs
//
// RGBA region as a nested pseudo-array:
//
//   // Showing 2x1 pixels from region (4,5)
//   // Tensor shape: [Height, Width, RGBA_Channels]
//   [
//     [
//       [255, 0, 0, 255], // Pixel (0,0)
//       [0, 255, 0, 255], // Pixel (1,0)
//     ],
//   ]
//
// Rows go top-to-bottom, pixels left-to-right, channels R, G, B, A.
// Pixel coordinates are local to the region.

use std::fmt;

use crate::pixel_buffer::{CHANNELS, PixelBuffer};

/// Text shown when nothing is selected.
pub const NO_PIXEL_DATA: &str = "// No pixel data to show.";

/// Which source the region came from; changes the header lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TensorHeader {
    Image,
    /// A snapshot of a video frame taken at `time` seconds.
    VideoFrame { time: f64 },
}

/// Display adapter producing the tensor text for a region.
pub struct PixelTensor<'a> {
    pub region: Option<&'a PixelBuffer>,
    /// Region origin in source coordinates.
    pub origin: (u32, u32),
    pub header: TensorHeader,
}

impl<'a> PixelTensor<'a> {
    pub fn new(region: Option<&'a PixelBuffer>, origin: (u32, u32), header: TensorHeader) -> Self {
        Self {
            region,
            origin,
            header,
        }
    }
}

impl fmt::Display for PixelTensor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(region) = self.region.filter(|r| !r.is_empty()) else {
            return f.write_str(NO_PIXEL_DATA);
        };
        let (ox, oy) = self.origin;

        write!(
            f,
            "// Showing {}x{} pixels from region ({},{})",
            region.width(),
            region.height(),
            ox,
            oy
        )?;
        match self.header {
            TensorHeader::Image => {
                f.write_str("\n// Tensor shape: [Height, Width, RGBA_Channels]\n")?;
            }
            TensorHeader::VideoFrame { time } => {
                writeln!(f, " at time {:.2}s", time)?;
                f.write_str("// Tensor shape: [Frames, Height, Width, RGBA_Channels]\n")?;
                f.write_str("// Showing a slice of the current frame:\n")?;
            }
        }

        f.write_str("[\n")?;
        for (y, row) in region.rows().enumerate() {
            f.write_str("  [\n")?;
            for (x, px) in row.chunks_exact(CHANNELS).enumerate() {
                writeln!(
                    f,
                    "    [{}, {}, {}, {}], // Pixel ({},{})",
                    px[0], px[1], px[2], px[3], x, y
                )?;
            }
            f.write_str("  ],\n")?;
        }
        f.write_str("]")
    }
}

/// Render a region's tensor text.
///
/// `None` (or an empty region) renders the single "no data" comment.
pub fn format_pixel_tensor(
    region: Option<&PixelBuffer>,
    origin: (u32, u32),
    header: TensorHeader,
) -> String {
    PixelTensor::new(region, origin, header).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pull every `[r, g, b, a]` tuple back out of the text, in order.
    fn parse_tuples(text: &str) -> Vec<[u8; 4]> {
        text.lines()
            .filter(|l| l.contains("// Pixel"))
            .map(|l| {
                let open = l.find('[').unwrap();
                let close = l.find(']').unwrap();
                let values: Vec<u8> = l[open + 1..close]
                    .split(", ")
                    .map(|v| v.parse().unwrap())
                    .collect();
                [values[0], values[1], values[2], values[3]]
            })
            .collect()
    }

    #[test]
    fn test_image_tensor_exact_layout() {
        let region = PixelBuffer::from_rgba(
            2,
            2,
            vec![
                1, 2, 3, 4, 5, 6, 7, 8, //
                9, 10, 11, 12, 13, 14, 15, 16,
            ],
        )
        .unwrap();
        let text = format_pixel_tensor(Some(&region), (4, 5), TensorHeader::Image);
        let expected = "\
// Showing 2x2 pixels from region (4,5)
// Tensor shape: [Height, Width, RGBA_Channels]
[
  [
    [1, 2, 3, 4], // Pixel (0,0)
    [5, 6, 7, 8], // Pixel (1,0)
  ],
  [
    [9, 10, 11, 12], // Pixel (0,1)
    [13, 14, 15, 16], // Pixel (1,1)
  ],
]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_tuples_round_trip_row_major() {
        let region = PixelBuffer::from_fn(5, 3, |x, y| [x as u8, y as u8, (x * y) as u8, 200]);
        let text = format_pixel_tensor(Some(&region), (0, 0), TensorHeader::Image);
        let tuples = parse_tuples(&text);

        assert_eq!(tuples.len(), 15);
        let mut i = 0;
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(Some(tuples[i]), region.pixel(x, y));
                i += 1;
            }
        }
    }

    #[test]
    fn test_video_frame_header() {
        let region = PixelBuffer::from_fn(1, 1, |_, _| [0, 0, 0, 255]);
        let text = format_pixel_tensor(
            Some(&region),
            (7, 8),
            TensorHeader::VideoFrame { time: 1.234 },
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "// Showing 1x1 pixels from region (7,8) at time 1.23s");
        assert_eq!(lines[1], "// Tensor shape: [Frames, Height, Width, RGBA_Channels]");
        assert_eq!(lines[2], "// Showing a slice of the current frame:");
        assert_eq!(lines[3], "[");
        assert_eq!(lines[5], "    [0, 0, 0, 255], // Pixel (0,0)");
    }

    #[test]
    fn test_no_region() {
        assert_eq!(
            format_pixel_tensor(None, (0, 0), TensorHeader::Image),
            NO_PIXEL_DATA
        );
    }
}
