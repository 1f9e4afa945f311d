use std::collections::HashMap;

use formulary::{
    EvalError,
    error::{FormulaError, StoreError},
    formula::{
        FORMULAS_KEY, Formula, FormulaBook,
        store::{FileStore, KeyValueStore, MemoryStore},
    },
};

fn values(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(name, value)| ((*name).to_string(), *value)).collect()
}

/// A store whose writes always fail. Reads return `blob` for every key.
struct ReadOnlyStore {
    blob: Option<Vec<u8>>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.blob.clone())
    }

    fn put(&mut self, key: &str, _blob: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::Io { key:    key.to_string(),
                             source: std::io::Error::other("read-only"), })
    }
}

#[test]
fn empty_store_gives_empty_book() {
    let book = FormulaBook::load(MemoryStore::new()).unwrap();
    assert!(book.formulas().is_empty());
}

#[test]
fn added_formulas_get_increasing_ids() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    let first = book.add("Area", "w * h").unwrap().id.clone();
    let second = book.add("Perimeter", "2 * (w + h)").unwrap().id.clone();

    assert_eq!(first, "1");
    assert_eq!(second, "2");
    assert_eq!(book.find_by_name("Perimeter").map(|f| f.id.as_str()), Some("2"));
    assert_eq!(book.get("1").map(Formula::variables), Some(vec!["w".to_string(), "h".to_string()]));
}

#[test]
fn blank_name_or_expression_is_rejected() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    assert!(matches!(book.add("  ", "1 + 1"), Err(FormulaError::EmptyName)));
    assert!(matches!(book.add("Two", "\t"), Err(FormulaError::EmptyExpression)));
    assert!(book.formulas().is_empty());
}

#[test]
fn formulas_are_persisted_on_every_change() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    book.add("Area", "w * h").unwrap();
    book.add("Double", "x * 2").unwrap();
    book.remove("1").unwrap();

    let store = book.into_store();
    let blob = store.get(FORMULAS_KEY).unwrap().unwrap();
    let stored: Vec<Formula> = serde_json::from_slice(&blob).unwrap();
    assert_eq!(stored,
               vec![Formula { id:         "2".to_string(),
                              name:       "Double".to_string(),
                              expression: "x * 2".to_string(), }]);

    let reloaded = FormulaBook::load(store).unwrap();
    assert_eq!(reloaded.formulas().len(), 1);
    assert_eq!(reloaded.formulas()[0].name, "Double");
}

#[test]
fn ids_continue_after_reload() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    book.add("A", "a").unwrap();
    book.add("B", "b").unwrap();
    book.remove("1").unwrap();

    let mut book = FormulaBook::load(book.into_store()).unwrap();
    assert_eq!(book.add("C", "c").unwrap().id, "3");
}

#[test]
fn stored_json_uses_plain_field_names() {
    let mut store = MemoryStore::new();
    store.put(FORMULAS_KEY,
             br#"[{"id":"1700000000000","name":"Margin","expression":"(p - c) / p * 100"}]"#)
         .unwrap();

    let mut book = FormulaBook::load(store).unwrap();
    assert_eq!(book.evaluate("1700000000000", &values(&[("p", 50.0), ("c", 40.0)])).unwrap(),
               20.0);
    assert_eq!(book.add("Next", "1").unwrap().id, "1700000000001");
}

#[test]
fn corrupt_blob_is_reported() {
    let mut store = MemoryStore::new();
    store.put(FORMULAS_KEY, b"not json").unwrap();
    assert!(matches!(FormulaBook::load(store), Err(FormulaError::Corrupt(_))));
}

#[test]
fn removing_unknown_formula_fails() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    match book.remove("42") {
        Err(FormulaError::UnknownFormula { id }) => assert_eq!(id, "42"),
        other => panic!("expected UnknownFormula, got {other:?}"),
    }
}

#[test]
fn missing_variables_are_listed_in_order() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    let id = book.add("Interest", "principal * rate * years / 100").unwrap().id.clone();

    match book.evaluate(&id, &values(&[("rate", 5.0), ("years", f64::NAN)])) {
        Err(FormulaError::MissingVariables { names }) => {
            assert_eq!(names, ["principal", "years"]);
        },
        other => panic!("expected MissingVariables, got {other:?}"),
    }

    let result = book.evaluate(&id, &values(&[("principal", 1000.0), ("rate", 5.0), ("years", 2.0)]));
    assert_eq!(result.unwrap(), 100.0);
}

#[test]
fn evaluation_errors_are_wrapped() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    let id = book.add("Ratio", "a / b").unwrap().id.clone();

    assert!(matches!(book.evaluate(&id, &values(&[("a", 1.0), ("b", 0.0)])),
                     Err(FormulaError::Eval(EvalError::DivisionByZero))));
    assert!(matches!(book.evaluate("9", &values(&[])),
                     Err(FormulaError::UnknownFormula { .. })));
}

#[test]
fn failed_write_leaves_book_unchanged() {
    let mut book = FormulaBook::load(ReadOnlyStore { blob: None }).unwrap();
    assert!(matches!(book.add("A", "1"), Err(FormulaError::Store(_))));
    assert!(book.formulas().is_empty());
}

#[test]
fn failed_write_keeps_removed_formula() {
    let blob = br#"[{"id":"1","name":"Area","expression":"w * h"},{"id":"2","name":"Double","expression":"x * 2"}]"#;
    let mut book = FormulaBook::load(ReadOnlyStore { blob: Some(blob.to_vec()) }).unwrap();

    assert!(matches!(book.remove("1"), Err(FormulaError::Store(_))));
    assert_eq!(book.formulas().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(), ["1", "2"]);
    assert_eq!(book.get("1").map(|f| f.name.as_str()), Some("Area"));
}

#[test]
fn inf_and_nan_are_ordinary_variables() {
    let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
    let id = book.add("Offset", "rate - inf").unwrap().id.clone();

    assert_eq!(book.get(&id).map(Formula::variables),
               Some(vec!["rate".to_string(), "inf".to_string()]));
    match book.evaluate(&id, &values(&[("rate", 5.0)])) {
        Err(FormulaError::MissingVariables { names }) => assert_eq!(names, ["inf"]),
        other => panic!("expected MissingVariables, got {other:?}"),
    }
    assert_eq!(book.evaluate(&id, &values(&[("rate", 5.0), ("inf", 2.0)])).unwrap(), 3.0);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("store");

    let mut book = FormulaBook::load(FileStore::new(&root)).unwrap();
    assert!(book.formulas().is_empty());
    let id = book.add("Speed", "distance / time").unwrap().id.clone();

    assert!(root.join(format!("{FORMULAS_KEY}.json")).is_file());

    let book = FormulaBook::load(FileStore::new(&root)).unwrap();
    assert_eq!(book.store().root(), root.as_path());
    let speed = book.evaluate(&id, &values(&[("distance", 120.0), ("time", 1.5)])).unwrap();
    assert_eq!(speed, 80.0);
}
