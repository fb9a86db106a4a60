use std::path::PathBuf;

use ore_core::core_api::{DecodeReport, FieldStatus, SaveContainer, TransactionRecord};
use ore_render::{
    FieldSelection, format_money, render_json_full, render_json_selected, render_selected_pairs,
    render_summary, render_summary_with_options,
};

fn sample_save() -> SaveContainer {
    SaveContainer {
        source_path: PathBuf::from("/saves/Slot1.sav"),
        size_bytes: 1_234_567,
        current_money_raw: 2_560_000,
        transactions: vec![
            TransactionRecord {
                item_code: "300001".to_string(),
                category: "Equipment".to_string(),
                amount_raw: -25_600,
            },
            TransactionRecord {
                item_code: "400187".to_string(),
                category: "Factory".to_string(),
                amount_raw: 128_000,
            },
        ],
        map_name: "DESERT_MINE".to_string(),
        engine_version: "++UE4+Release-4.27".to_string(),
        game_version: "0.9.14".to_string(),
        report: DecodeReport {
            engine_version: FieldStatus::Decoded,
            game_version: FieldStatus::Decoded,
            money: FieldStatus::Decoded,
            transactions: FieldStatus::Decoded,
            map: FieldStatus::Decoded,
            transaction_section: None,
            discarded_candidates: 3,
        },
    }
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let value = render_json_full(&sample_save());
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "file",
            "size_bytes",
            "engine_version",
            "game_version",
            "map",
            "current_money",
            "current_money_raw",
            "transaction_count",
            "total_sales",
            "total_purchases",
            "transactions",
            "report",
        ]
    );
}

#[test]
fn full_json_values_are_scaled() {
    let value = render_json_full(&sample_save());

    assert_eq!(value["file"], "Slot1.sav");
    assert_eq!(value["current_money"], 10_000.0);
    assert_eq!(value["current_money_raw"], 2_560_000);
    assert_eq!(value["total_purchases"], -100.0);
    assert_eq!(value["total_sales"], 500.0);
    assert_eq!(value["transactions"][0]["type"], "Purchase");
    assert_eq!(value["transactions"][1]["amount"], 500.0);
    assert_eq!(value["report"]["complete"], true);
    assert_eq!(value["report"]["discarded_candidates"], 3);
    assert!(value["report"]["transaction_section"].is_null());
}

#[test]
fn selected_json_contains_only_requested_fields() {
    let fields = FieldSelection {
        money: true,
        map: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&sample_save(), &fields);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(keys, vec!["map", "current_money", "current_money_raw"]);
}

#[test]
fn selected_pairs_follow_field_order() {
    let fields = FieldSelection {
        totals: true,
        transactions: true,
        ..FieldSelection::default()
    };
    let pairs = render_selected_pairs(&sample_save(), &fields);

    assert_eq!(
        pairs,
        vec![
            ("transaction_count", "2".to_string()),
            ("total_sales", "$500".to_string()),
            ("total_purchases", "-$100".to_string()),
            ("transaction", "300001 Equipment -$100".to_string()),
            ("transaction", "400187 Factory $500".to_string()),
        ]
    );
}

#[test]
fn summary_lists_headline_figures() {
    let text = render_summary(&sample_save());

    assert!(text.contains("File:           Slot1.sav\n"));
    assert!(text.contains("Size:           1,234,567 bytes\n"));
    assert!(text.contains("Map:            DESERT_MINE\n"));
    assert!(text.contains("Current Money:  $10,000\n"));
    assert!(text.contains("Transactions:   2\n"));
    assert!(text.contains("Total Sales:    $500\n"));
    assert!(text.contains("Total Purchases:-$100\n"));
    assert!(!text.contains("Purchase\n"));
}

#[test]
fn verbose_summary_adds_tables() {
    let text = render_summary_with_options(&sample_save(), true);

    assert!(text.contains("300001    Equipment                  -$100  Purchase\n"));
    assert!(text.contains("400187    Factory                     $500  Sale\n"));
    assert!(text.contains("money:          decoded\n"));
    assert!(text.contains("complete:       yes\n"));
    assert!(text.contains("discarded:      3\n"));
}

#[test]
fn report_pairs_flag_incomplete_decodes() {
    let mut save = sample_save();
    save.report.map = FieldStatus::Absent;
    let fields = FieldSelection {
        report: true,
        ..FieldSelection::default()
    };
    let pairs = render_selected_pairs(&save, &fields);

    assert!(pairs.contains(&("status", "map=absent".to_string())));
    assert!(pairs.contains(&("complete", "false".to_string())));
    assert_eq!(
        pairs.last(),
        Some(&("discarded_candidates", "3".to_string()))
    );
}

#[test]
fn money_formatting_groups_thousands() {
    assert_eq!(format_money(0.0), "$0");
    assert_eq!(format_money(999.4), "$999");
    assert_eq!(format_money(1_000.0), "$1,000");
    assert_eq!(format_money(-1_234_567.0), "-$1,234,567");
}
