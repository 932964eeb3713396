use caramel::application::services::{PromptBuilder, PromptLimits, TableStyle, PERSONA};
use caramel::domain::{
    AnalysisType, FileContent, FileKind, ParsedFile, SectionRole, TableData,
};

fn text_file(content: &str) -> ParsedFile {
    ParsedFile {
        filename: "notes.txt".to_string(),
        extension: ".txt".to_string(),
        kind: Some(FileKind::Txt),
        size_bytes: content.len() as u64,
        content: FileContent::Text(content.to_string()),
    }
}

fn csv_file(rows: usize) -> ParsedFile {
    let table = TableData::new(
        vec!["name".to_string(), "value".to_string()],
        (0..rows)
            .map(|i| vec![format!("name{i}"), i.to_string()])
            .collect(),
    );
    ParsedFile {
        filename: "data.csv".to_string(),
        extension: ".csv".to_string(),
        kind: Some(FileKind::Csv),
        size_bytes: 1024,
        content: FileContent::Table(table),
    }
}

#[test]
fn given_text_document_and_query_when_building_then_sections_follow_fixed_order() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(
        &text_file("Caramel AI features: X, Y, Z"),
        "What are the features?",
        AnalysisType::General,
    );

    let roles: Vec<SectionRole> = prompt.sections.iter().map(|s| s.role).collect();
    assert_eq!(
        roles,
        vec![
            SectionRole::System,
            SectionRole::Task,
            SectionRole::DocumentInfo,
            SectionRole::DocumentBody,
            SectionRole::UserQuery,
        ]
    );
}

#[test]
fn given_any_document_when_building_then_persona_leads_the_prompt() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let rendered = builder
        .build(&text_file("hello"), "", AnalysisType::General)
        .render();

    assert!(rendered.starts_with("## System"));
    assert!(rendered.contains(PERSONA));
}

#[test]
fn given_parsed_file_when_building_then_metadata_rendered_verbatim() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&text_file("hello"), "", AnalysisType::General);

    let info = &prompt.section(SectionRole::DocumentInfo).unwrap().body;
    assert!(info.contains("**Filename:** notes.txt"));
    assert!(info.contains("**File Type:** .txt"));
    assert!(info.contains("**File Size:** 5 bytes"));
}

#[test]
fn given_summary_analysis_when_building_then_task_asks_for_summary() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&text_file("hello"), "", AnalysisType::Summary);

    let task = &prompt.section(SectionRole::Task).unwrap().body;
    assert!(task.contains("comprehensive summary"));
}

#[test]
fn given_empty_query_when_building_then_no_user_query_section() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&text_file("hello"), "", AnalysisType::General);

    assert!(prompt.section(SectionRole::UserQuery).is_none());
}

#[test]
fn given_query_when_building_then_it_closes_the_prompt() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let rendered = builder
        .build(&text_file("hello"), "what is this?", AnalysisType::General)
        .render();

    assert!(rendered.ends_with("## User Query\n\nwhat is this?"));
}

#[test]
fn given_text_over_the_cap_when_building_then_body_truncated_with_marker() {
    let content = format!("{}UNSEEN_TAIL{}", "a".repeat(10_000), "b".repeat(9_989));
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&text_file(&content), "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    assert!(body.starts_with(&"a".repeat(10_000)));
    assert!(body.ends_with("[Content truncated for brevity...]"));
    assert!(!body.contains("UNSEEN_TAIL"));
}

#[test]
fn given_text_at_the_cap_when_building_then_body_left_untouched() {
    let content = "a".repeat(10_000);
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&text_file(&content), "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    assert_eq!(body, &content);
}

#[test]
fn given_multibyte_text_over_the_cap_when_building_then_cut_on_char_boundary() {
    let content = "é".repeat(12_000);
    let builder = PromptBuilder::new(PromptLimits::compact());

    let prompt = builder.build(&text_file(&content), "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    let kept = body.chars().take_while(|c| *c == 'é').count();
    assert_eq!(kept, 8_000);
    assert!(body.ends_with("[Content truncated for brevity...]"));
}

#[test]
fn given_150_row_table_when_building_then_first_100_rows_with_note() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&csv_file(150), "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    assert!(body.starts_with("name,value"));
    assert!(body.contains("name99,99"));
    assert!(!body.contains("name100"));
    assert!(body.contains("*Note: Showing first 100 rows of 150 total rows.*"));
}

#[test]
fn given_small_table_when_building_then_all_rows_and_no_note() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&csv_file(3), "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    assert!(body.contains("name2,2"));
    assert!(!body.contains("Note: Showing"));
}

#[test]
fn given_compact_limits_when_building_then_50_markdown_rows() {
    let builder = PromptBuilder::new(PromptLimits::compact());

    let prompt = builder.build(&csv_file(150), "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    assert!(body.starts_with("| name | value |"));
    assert!(body.contains("| name49 | 49 |"));
    assert!(!body.contains("name50"));
    assert!(body.contains("*Note: Showing first 50 rows of 150 total rows.*"));
}

#[test]
fn given_cell_with_comma_when_rendering_csv_style_then_cell_is_quoted() {
    let table = TableData::new(
        vec!["name".to_string(), "city".to_string()],
        vec![vec!["John".to_string(), "Paris, FR".to_string()]],
    );
    let parsed = ParsedFile {
        filename: "data.csv".to_string(),
        extension: ".csv".to_string(),
        kind: Some(FileKind::Csv),
        size_bytes: 64,
        content: FileContent::Table(table),
    };
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&parsed, "", AnalysisType::General);

    let body = &prompt.section(SectionRole::DocumentBody).unwrap().body;
    assert!(body.contains("John,\"Paris, FR\""));
}

#[test]
fn given_table_with_no_rows_when_building_then_body_omitted() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&csv_file(0), "", AnalysisType::General);

    assert!(prompt.section(SectionRole::DocumentBody).is_none());
}

#[test]
fn given_error_envelope_when_building_then_no_body_section() {
    let parsed = ParsedFile {
        filename: "payload.exe".to_string(),
        extension: ".exe".to_string(),
        kind: None,
        size_bytes: 64,
        content: FileContent::Error("Unsupported file type: .exe".to_string()),
    };
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&parsed, "what is this?", AnalysisType::General);

    assert!(prompt.section(SectionRole::DocumentBody).is_none());
    assert!(prompt.section(SectionRole::DocumentInfo).is_some());
    assert!(!prompt.render().contains("Unsupported file type"));
}

#[test]
fn given_text_starting_with_error_when_building_then_body_omitted() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(
        &text_file("Error parsing PDF: bad xref table"),
        "",
        AnalysisType::General,
    );

    assert!(prompt.section(SectionRole::DocumentBody).is_none());
}

#[test]
fn given_empty_text_when_building_then_body_omitted() {
    let builder = PromptBuilder::new(PromptLimits::standard());

    let prompt = builder.build(&text_file(""), "", AnalysisType::General);

    assert!(prompt.section(SectionRole::DocumentBody).is_none());
}

#[test]
fn given_profiles_when_asking_limits_then_caps_match_policy() {
    let standard = PromptLimits::standard();
    assert_eq!(standard.max_table_rows, 100);
    assert_eq!(standard.max_text_chars, 10_000);
    assert_eq!(standard.table_style, TableStyle::Csv);

    let compact = PromptLimits::compact();
    assert_eq!(compact.max_table_rows, 50);
    assert_eq!(compact.max_text_chars, 8_000);
    assert_eq!(compact.table_style, TableStyle::Markdown);

    assert_eq!(PromptLimits::default(), standard);
}
