use pretty_assertions::assert_eq;
use rstest::rstest;
use syncfolder_fs::NormalizedPath;

#[rstest]
#[case("img/cat.jpg", "img/cat.jpg")]
#[case("img\\cat.jpg", "img/cat.jpg")]
#[case("img/old/", "img/old")]
#[case("/", "/")]
#[case("", "")]
fn test_normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[rstest]
#[case("/work/src/img/cat.jpg", "/work/src", Some("img/cat.jpg"))]
#[case("/work/src", "/work/src", Some(""))]
#[case("/work/src/", "/work/src", Some(""))]
#[case("/work/src-min/cat.jpg", "/work/src", None)]
#[case("/work/other/cat.jpg", "/work/src", None)]
#[case("dist/img/a.png", "dist", Some("img/a.png"))]
fn test_relative_to(#[case] path: &str, #[case] root: &str, #[case] expected: Option<&str>) {
    let key = NormalizedPath::relative_to(path, root);
    assert_eq!(key.as_ref().map(|k| k.as_str()), expected);
}

#[test]
fn test_join_onto_root_key() {
    let root = NormalizedPath::root_key();
    assert_eq!(root.join("img").join("cat.jpg").as_str(), "img/cat.jpg");
}

#[test]
fn test_join_empty_segment_is_identity() {
    let source = NormalizedPath::new("assets/images");
    assert_eq!(source.join(""), source);
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("img/old/a.png");
    assert_eq!(path.file_name(), Some("a.png"));
    assert_eq!(path.extension(), Some("png"));
    assert_eq!(NormalizedPath::new(".hidden").extension(), None);
}
