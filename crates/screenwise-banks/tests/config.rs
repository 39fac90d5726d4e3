use screenwise_banks::config::{BankConfig, CustomBank};
use screenwise_banks::error::BankError;
use screenwise_banks::question::Respondent;
use screenwise_banks::{QuestionBank, get_bank};

const SCHOOL_BANK: &str = r#"{
    "id": "school",
    "name": "Teacher Report",
    "respondent": "clinician",
    "family_history_question": "family_history",
    "questions": [
        { "id": "peers", "text": "Plays alone at recess.", "weight": 1.2, "domain": "Social Interaction", "action": "Pair with a peer buddy." },
        { "id": "instructions", "text": "Misses verbal instructions.", "weight": 0.8, "domain": "Language", "action": "Give written instructions." }
    ]
}"#;

#[test]
fn loads_bank_from_json() {
    let bank = CustomBank::from_json(SCHOOL_BANK).unwrap();
    assert_eq!(bank.id(), "school");
    assert_eq!(bank.respondent(), Respondent::Clinician);
    assert_eq!(bank.questions().len(), 2);
    assert_eq!(bank.family_history_question(), Some("family_history"));
    assert!((bank.total_weight() - 2.0).abs() < 1e-12);
}

#[test]
fn family_history_question_is_optional() {
    let json = r#"{
        "id": "mini",
        "name": "Mini",
        "respondent": "individual",
        "questions": [
            { "id": "q", "text": "Q", "weight": 1.0, "domain": "D", "action": "A" }
        ]
    }"#;
    let bank = CustomBank::from_json(json).unwrap();
    assert_eq!(bank.family_history_question(), None);
}

#[test]
fn rejects_malformed_json() {
    let err = CustomBank::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BankError::Parse(_)));
}

#[test]
fn rejects_inconsistent_bank() {
    let json = r#"{
        "id": "bad",
        "name": "Bad",
        "respondent": "parent",
        "questions": [
            { "id": "q", "text": "Q", "weight": -1.0, "domain": "D", "action": "A" }
        ]
    }"#;
    let err = CustomBank::from_json(json).unwrap_err();
    match err {
        BankError::Invalid { bank_id, issues } => {
            assert_eq!(bank_id, "bad");
            assert_eq!(issues.len(), 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = CustomBank::from_path("/nonexistent/screenwise/bank.json").unwrap_err();
    assert!(matches!(err, BankError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/screenwise/bank.json"));
}

#[test]
fn built_in_bank_exports_as_config() {
    let parent = get_bank("parent").unwrap();
    let config = BankConfig::from_bank(parent.as_ref());
    let json = serde_json::to_string(&config).unwrap();

    let reloaded = CustomBank::from_json(&json).unwrap();
    assert_eq!(reloaded.questions(), parent.questions());
    assert_eq!(reloaded.family_history_question(), Some("family_history"));
}
