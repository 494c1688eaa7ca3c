use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_words");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn line_repeats_text_with_trailing_space() {
    let e = WordEntry {
        text: "rust".to_string(),
        weight: 3,
    };
    assert_eq!(e.to_line(), "rust rust rust \n");
}

#[test]
fn zero_weight_writes_only_newline() {
    let e = WordEntry {
        text: "ghost".to_string(),
        weight: 0,
    };
    assert_eq!(e.to_line(), "\n");
}

#[test]
fn append_creates_then_extends_the_file() {
    let path = scratch("append.txt");
    let list = WordList::new(&path);
    assert_eq!(list.path(), path.as_path());
    list.append(&WordEntry {
        text: "a".to_string(),
        weight: 2,
    })
    .unwrap();
    list.append(&WordEntry {
        text: "bé".to_string(),
        weight: 1,
    })
    .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a a \nbé \n");
}

#[test]
fn append_into_missing_directory_fails() {
    let list = WordList::new("target/unit_words/missing/dir/list.txt");
    let err = list
        .append(&WordEntry {
            text: "x".to_string(),
            weight: 1,
        })
        .unwrap_err();
    assert!(err.to_string().contains("open word list"));
}
