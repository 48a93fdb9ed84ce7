use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use terrain::circle::CircleMesh;
use terrain::TerrainMesh;

/// Writes the mesh as Wavefront OBJ, with vertex colors appended to `v` lines.
pub fn write_obj<W: Write>(mesh: &TerrainMesh, mut out: W) -> Result<(), ExportError> {
    let grid = mesh.grid();
    writeln!(out, "# terrain {}x{}", grid.x(), grid.y())?;

    for v in mesh.vertices() {
        let [x, y, z] = v.position;
        let [r, g, b] = v.color;
        writeln!(out, "v {x} {y} {z} {r} {g} {b}")?;
    }

    for v in mesh.vertices() {
        let [s, t] = v.tex_coord;
        writeln!(out, "vt {s} {t}")?;
    }

    for v in mesh.vertices() {
        let [x, y, z] = v.normal;
        writeln!(out, "vn {x} {y} {z}")?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    out.flush()?;

    Ok(())
}

pub fn write_circle_obj<W: Write>(circle: &CircleMesh, mut out: W) -> Result<(), ExportError> {
    writeln!(out, "# circle {} edges", circle.edges())?;

    for [x, y, z] in circle.positions() {
        writeln!(out, "v {x} {y} {z}")?;
    }

    for t in circle.indices().chunks_exact(3) {
        writeln!(out, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1)?;
    }

    out.flush()?;

    Ok(())
}

pub fn write_json<W: Write>(mesh: &TerrainMesh, mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer(&mut out, mesh)?;
    out.flush()?;

    Ok(())
}

/// Writes tightly packed 8-bit RGB rows as a PNG file.
pub fn write_png(path: &Path, width: u32, height: u32, rgb: &[u8]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb)?;
    writer.finish()?;

    Ok(())
}

pub fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    Ok(BufWriter::new(File::create(path)?))
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Png(#[from] png::EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use terrain::circle::fan;
    use terrain::generate;

    fn flat(_: f32, _: f32) -> f32 {
        0.0
    }

    struct DiskFull;

    impl Write for DiskFull {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn obj_for_single_quad() {
        let mesh = generate(1, 1, &flat).unwrap();

        let mut buf = Vec::new();
        write_obj(&mesh, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "# terrain 1x1");
        assert_eq!(lines[1], "v -0.5 -0.5 0 0.1 0.8 0.3");
        assert_eq!(lines.iter().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("vn ")).count(), 4);
        assert_eq!(lines[lines.len() - 2], "f 1/1/1 3/3/3 2/2/2");
        assert_eq!(lines[lines.len() - 1], "f 2/2/2 3/3/3 4/4/4");
    }

    #[test]
    fn circle_obj() {
        let circle = fan(3, 1.0).unwrap();

        let mut buf = Vec::new();
        write_circle_obj(&circle, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# circle 3 edges\nv 0 0 0\n"));
        assert!(text.ends_with("f 1 2 3\nf 1 3 4\nf 1 4 2\n"));
    }

    #[test]
    fn json_has_buffers() {
        let mesh = generate(2, 1, &flat).unwrap();

        let mut buf = Vec::new();
        write_json(&mesh, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["grid"]["x"], 2);
        assert_eq!(value["vertices"].as_array().unwrap().len(), 6);
        assert_eq!(value["indices"].as_array().unwrap().len(), 12);
        assert_eq!(value["vertices"][0]["normal"][2], 1.0);
    }

    #[test]
    fn buffered_json_reports_failed_write() {
        let mesh = generate(2, 2, &flat).unwrap();

        let out = BufWriter::with_capacity(1 << 20, DiskFull);
        let result = write_json(&mesh, out);

        assert!(matches!(result, Err(ExportError::Io(_))), "{result:?}");
    }

    #[test]
    fn buffered_obj_reports_failed_write() {
        let mesh = generate(1, 1, &flat).unwrap();

        let out = BufWriter::with_capacity(1 << 20, DiskFull);

        assert!(matches!(write_obj(&mesh, out), Err(ExportError::Io(_))));
    }

    #[test]
    fn png_is_complete() {
        let path = std::env::temp_dir().join(format!("terrain-export-{}.png", std::process::id()));
        let rgb = [255_u8, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];

        write_png(&path, 2, 2, &rgb).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((info.width, info.height), (2, 2));
        assert_eq!(&buf[..info.buffer_size()], &rgb);
    }
}
