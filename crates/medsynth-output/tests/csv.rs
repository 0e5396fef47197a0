use medsynth_model::VisitRecord;
use medsynth_output::{UTF8_BOM, write_dataset, write_dataset_csv};

fn record(name: &str, symptoms: &[&str], cost: f64) -> VisitRecord {
    VisitRecord {
        full_name: name.to_string(),
        passport: "7712 345678".to_string(),
        snils: "112364895 41".to_string(),
        symptoms: symptoms.iter().map(|s| (*s).to_string()).collect(),
        specialist: "Cardiologist".to_string(),
        visit_at: "2024-03-01T10:15".to_string(),
        analyses: vec!["ECG".to_string(), "Blood panel".to_string()],
        analysis_at: "2024-02-27T09:40".to_string(),
        cost,
        card_number: "4306 4312 1234 5678".to_string(),
    }
}

fn render(records: &[VisitRecord]) -> String {
    let mut buffer = Vec::new();
    write_dataset(&mut buffer, records).expect("write dataset");
    assert!(buffer.starts_with(UTF8_BOM));
    String::from_utf8(buffer[UTF8_BOM.len()..].to_vec()).expect("utf-8 output")
}

#[test]
fn writes_header_and_rows() {
    let text = render(&[
        record("Jane Doe", &["chest pain", "fatigue"], 2300.0),
        record("John; Smith", &["sore \"throat\""], 1234.99),
    ]);
    assert!(text.ends_with("\r\n"));
    let text = text.replace("\r\n", "\n");
    insta::assert_snapshot!(text.trim_end(), @r#"
    ФИО;Паспорт;СНИЛС;Симптомы;Врач;Дата_посещения;Анализы;Дата_анализов;Стоимость;Карта_оплаты
    Jane Doe;7712 345678;112364895 41;chest pain, fatigue;Cardiologist;2024-03-01T10:15;ECG, Blood panel;2024-02-27T09:40;2300;4306 4312 1234 5678
    "John; Smith";7712 345678;112364895 41;"sore ""throat""";Cardiologist;2024-03-01T10:15;ECG, Blood panel;2024-02-27T09:40;1234;4306 4312 1234 5678
    "#);
}

#[test]
fn empty_dataset_is_header_only() {
    let text = render(&[]);
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn creates_parent_directories_and_overwrites() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("output").join("medical_dataset.csv");

    write_dataset_csv(&path, &[record("Jane Doe", &["fatigue"], 10.0)]).expect("first write");
    write_dataset_csv(&path, &[]).expect("second write");

    let bytes = std::fs::read(&path).expect("read output");
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("ФИО;"));
}
