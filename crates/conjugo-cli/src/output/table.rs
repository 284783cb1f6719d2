//! Paradigm tables for terminal output.
//!
//! Rows whose forms are all placeholders are left out, as are tables with
//! no rows left. Remaining placeholder cells are blank.

use comfy_table::{presets, ContentArrangement, Table};
use conjugo::types::{
    Gerund, Imperatives, Infinitives, Supine, IMPERATIVE_LABELS, PERSON_LABELS,
};
use conjugo::{Declension, Form, Tense};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn cell(form: &Form) -> String {
    if form.is_placeholder() {
        String::new()
    } else {
        form.to_string()
    }
}

/// Finite tenses, one row per tense.
pub fn tense_table(tenses: &[(&str, &Tense)]) -> Option<Table> {
    let mut table = new_table([""].into_iter().chain(PERSON_LABELS).collect());
    let mut rows = 0;
    for (name, tense) in tenses {
        if tense.is_placeholder() {
            continue;
        }
        let mut row = vec![(*name).to_string()];
        row.extend(tense.iter().map(cell));
        table.add_row(row);
        rows += 1;
    }
    (rows > 0).then_some(table)
}

pub fn imperative_table(imperatives: &Imperatives) -> Option<Table> {
    let mut table = new_table([""].into_iter().chain(IMPERATIVE_LABELS).collect());
    let mut rows = 0;
    for (name, row) in imperatives.rows() {
        if row.is_placeholder() {
            continue;
        }
        let mut cells = vec![name.to_string()];
        cells.extend(row.iter().map(cell));
        table.add_row(cells);
        rows += 1;
    }
    (rows > 0).then_some(table)
}

pub fn infinitive_table(infinitives: &Infinitives) -> Option<Table> {
    let mut table = new_table(vec!["Infinitive", "Active", "Passive"]);
    let mut rows = 0;
    for (name, active, passive) in infinitives.rows() {
        if active.is_placeholder() && passive.is_placeholder() {
            continue;
        }
        table.add_row(vec![name.to_string(), cell(active), cell(passive)]);
        rows += 1;
    }
    (rows > 0).then_some(table)
}

/// Gerund and supine share one table of oblique cases.
pub fn gerund_table(gerunds: &[(&str, &Gerund)], supine: &Supine) -> Option<Table> {
    let mut table = new_table(vec!["", "Gen", "Dat", "Acc", "Abl"]);
    let mut rows = 0;
    for (name, gerund) in gerunds {
        if gerund.is_placeholder() {
            continue;
        }
        let mut row = vec![(*name).to_string()];
        row.extend(gerund.cases().iter().map(|(_, form)| cell(form)));
        table.add_row(row);
        rows += 1;
    }
    if !(supine.accusative.is_placeholder() && supine.ablative.is_placeholder()) {
        table.add_row(vec![
            "Supine".to_string(),
            String::new(),
            String::new(),
            cell(&supine.accusative),
            cell(&supine.ablative),
        ]);
        rows += 1;
    }
    (rows > 0).then_some(table)
}

/// One participle, one column per gender.
pub fn declension_table(declension: &Declension) -> Table {
    let genders = declension.genders();
    let mut table = new_table(
        [""].into_iter()
            .chain(genders.iter().map(|(label, _)| *label))
            .collect(),
    );
    let columns: Vec<_> = genders.iter().map(|(_, cases)| cases.cases()).collect();
    let Some(first) = columns.first() else {
        return table;
    };
    for (index, (label, _)) in first.iter().enumerate() {
        let mut row = vec![(*label).to_string()];
        row.extend(columns.iter().map(|cases| cell(cases[index].1)));
        table.add_row(row);
    }
    table
}
