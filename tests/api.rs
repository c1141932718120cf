use std::fs;
use svg2msvg::error::ConvertError;
use svg2msvg::{Converter, MsvgDocument, INPUT_DIR, OUTPUT_FILE};

#[test]
fn default_converter_uses_fixed_paths() {
    let converter = Converter::default();
    assert_eq!(converter.input_dir(), std::path::Path::new(INPUT_DIR));
    assert_eq!(converter.output_path(), std::path::Path::new(OUTPUT_FILE));
}

#[test]
fn converted_output_parses_back_into_pages() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("pages");
    fs::create_dir(&input).unwrap();
    fs::write(
        input.join("page10_v2.svg"),
        "<?xml version=\"1.0\"?>\n<svg>ten</svg>",
    )
    .unwrap();
    fs::write(input.join("page9_v30.svg"), "<svg>nine</svg>").unwrap();
    fs::write(input.join("cover.svg"), "<svg>cover</svg>").unwrap();

    let output = temp.path().join("book.msvg");
    let report = Converter::new(&input, &output).run().expect("conversion succeeds");
    assert_eq!(report.pages, ["cover.svg", "page9_v30.svg", "page10_v2.svg"]);
    assert_eq!(report.output_path, output);

    let document = MsvgDocument::parse(&fs::read(&output).unwrap()).expect("output parses");
    let bodies: Vec<String> = document
        .pages()
        .iter()
        .map(|page| String::from_utf8(page.body.clone()).unwrap())
        .collect();
    assert_eq!(bodies, ["<svg>cover</svg>", "<svg>nine</svg>", "<svg>ten</svg>"]);
}

#[test]
fn fatal_errors_carry_the_offending_path() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("nope");

    let err = Converter::new(&missing, temp.path().join("out.msvg"))
        .run()
        .unwrap_err();

    match &err {
        ConvertError::ReadInputDir { path, source } => {
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Error reading "));
}
