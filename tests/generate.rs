use std::path::PathBuf;

use placeholder::{
    DEFAULT_COLOR, DimensionSpec, Generator, GeneratorConfig, Limits, Outcome,
    PlaceholderRequest, RenderOptions, placeholder_exists,
};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "placeholder_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn generator(out_root: PathBuf) -> Generator {
    Generator::new(GeneratorConfig {
        out_root,
        ..GeneratorConfig::default()
    })
}

#[test]
fn generate_creates_then_reuses_regardless_of_color() {
    let dir = temp_dir("generate_cache");
    let g = generator(dir.clone());
    let spec = DimensionSpec::Size {
        width: Some(200),
        height: Some(100),
    };

    let req = PlaceholderRequest::resolve(&spec, DEFAULT_COLOR, &Limits::default()).unwrap();
    let first = g.generate(&req).unwrap();
    let expected = dir.join("placeholders").join("200_x_100.jpg");
    assert_eq!(first, Outcome::Created(expected.clone()));
    assert!(placeholder_exists(200, 100, &dir.join("placeholders")));

    let bytes_before = std::fs::read(&expected).unwrap();

    let red = PlaceholderRequest::resolve(&spec, "#ff0000", &Limits::default()).unwrap();
    let second = g.generate(&red).unwrap();
    assert_eq!(second, Outcome::Cached(expected.clone()));
    assert_eq!(std::fs::read(&expected).unwrap(), bytes_before);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn generated_jpeg_decodes_with_cross_colors() {
    let dir = temp_dir("generate_decode");
    let g = Generator::new(GeneratorConfig {
        out_root: dir.clone(),
        render: RenderOptions { blur_sigma: None },
        jpeg_quality: 95,
        ..GeneratorConfig::default()
    });
    let spec = DimensionSpec::ratio(vec![4, 3]);
    let req = PlaceholderRequest::resolve(&spec, "#000000", &Limits::default()).unwrap();

    let outcome = g.generate(&req).unwrap();
    let img = image::open(outcome.path()).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (400, 300));

    // JPEG is lossy; compare loosely. The center sits on both diagonals.
    let center = img.get_pixel(200, 150).0;
    assert!(center.iter().all(|&c| c > 200), "center {center:?}");
    let edge = img.get_pixel(200, 10).0;
    assert!(edge.iter().all(|&c| c < 40), "edge {edge:?}");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn invalid_request_never_touches_disk() {
    let dir = temp_dir("generate_invalid");
    let spec = DimensionSpec::Size {
        width: Some(10),
        height: Some(100),
    };
    let err = PlaceholderRequest::resolve(&spec, DEFAULT_COLOR, &Limits::default()).unwrap_err();
    assert!(err.is_validation());
    assert!(!dir.exists());
}
