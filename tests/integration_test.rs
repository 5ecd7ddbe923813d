use exam_question_extract::config::Config;
use exam_question_extract::models::{
    load_all_documents, load_document, Block, BoundingBox, Document, Page, QuestionOption,
    QuestionType, Subject,
};
use exam_question_extract::orchestrator::{process_paper, App};
use exam_question_extract::services::artifact_writer::EXTRACTED_DATA_FILE;
use exam_question_extract::services::question_number::parse_question_number;
use exam_question_extract::services::{
    segmenter, ArtifactWriter, OptionExtractor, StatementExtractor,
};
use exam_question_extract::utils::logging;
use std::path::Path;

fn block(text: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Block {
    Block::new(text, BoundingBox::new(x0, y0, x1, y1))
}

fn page(number: u32, lines: &[&str]) -> Page {
    let blocks = lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let y = i as f64 * 20.0;
            block(l, 10.0, y, 500.0, y + 15.0)
        })
        .collect();
    Page::new(number, blocks)
}

const SAMPLE_JSON: &str = r#"{
  "name": "JEE Main 2024 (27 Jan Shift 1)",
  "pages": [
    {
      "number": 1,
      "blocks": [
        { "text": "Q1. A particle moves with constant velocity.", "bbox": { "x0": 10, "y0": 10, "x1": 400, "y1": 30 } },
        { "text": "(1) True (2) False", "bbox": { "x0": 20, "y0": 35, "x1": 300, "y1": 50 } }
      ],
      "images": [ { "ext": "png", "data": [137, 80, 78, 71] } ]
    },
    {
      "number": 2,
      "blocks": [
        { "text": "Answer Keys", "bbox": { "x0": 10, "y0": 10, "x1": 200, "y1": 30 } },
        { "text": "1. (2)", "bbox": { "x0": 10, "y0": 40, "x1": 100, "y1": 60 } }
      ]
    }
  ]
}"#;

const SAMPLE_TOML: &str = r#"
[[pages]]
number = 1

[[pages.blocks]]
text = "Question 4 Calculate the value of 3 x 10^8 / 2."
bbox = { x0 = 0.0, y0 = 0.0, x1 = 10.0, y1 = 10.0 }
"#;

#[test]
fn test_end_to_end_single_block() {
    logging::init(false);

    let document = Document::new(
        "Sample",
        vec![Page::new(
            1,
            vec![block(
                "Q1. A particle moves with constant velocity. (1) True (2) False",
                0.0,
                0.0,
                100.0,
                20.0,
            )],
        )],
    );

    let data = process_paper(&document, 1, &Config::default());

    assert_eq!(data.questions.len(), 1);
    let q = &data.questions[0];
    assert_eq!(q.number, 1);
    assert_eq!(
        q.options,
        vec![
            QuestionOption::new("(1)", "True"),
            QuestionOption::new("(2)", "False")
        ]
    );
    assert_eq!(q.subject, Subject::Physics);
    assert_eq!(q.question_type, QuestionType::Mcq);
    assert!(data.images.is_empty());
}

#[test]
fn test_choose_the_correct_answer_wording_keeps_options() {
    let document = Document::new(
        "Sample",
        vec![page(
            1,
            &["Q3. Which gas is lighter than air? Choose the correct answer: \
               (1) Hydrogen (2) Carbon dioxide (3) Chlorine (4) Argon"],
        )],
    );

    let data = process_paper(&document, 1, &Config::default());

    assert_eq!(data.questions.len(), 1);
    let q = &data.questions[0];
    assert_eq!(q.options.len(), 4);
    assert_eq!(q.options[3], QuestionOption::new("(4)", "Argon"));
    assert_eq!(q.answer_key, None);
    assert!(q.text.ends_with("Choose the correct answer:"));
}

#[test]
fn test_image_stem_question_is_emitted() {
    let document = Document::new(
        "Sample",
        vec![page(1, &["Q5.", "(1) 2 m/s (2) 4 m/s (3) 6 m/s (4) 8 m/s"])],
    );

    let data = process_paper(&document, 1, &Config::default());

    assert_eq!(data.questions.len(), 1);
    assert_eq!(data.questions[0].number, 5);
    assert_eq!(data.questions[0].options.len(), 4);
}

#[test]
fn test_segmentation_completeness() {
    let blocks = vec![
        block("Q1. First", 10.0, 10.0, 200.0, 20.0),
        block("continued", 5.0, 22.0, 180.0, 30.0),
        block("Q2. Second", 10.0, 40.0, 150.0, 50.0),
        block("more", 12.0, 52.0, 260.0, 60.0),
        block("and more", 8.0, 62.0, 100.0, 70.0),
    ];

    let spans = segmenter::segment(&blocks);

    assert_eq!(spans.len(), 2);
    assert!(spans[0].text.starts_with("Q1."));
    assert!(spans[1].text.starts_with("Q2."));
    assert_eq!(spans[0].bbox, BoundingBox::new(5.0, 10.0, 200.0, 30.0));
    assert_eq!(spans[1].bbox, BoundingBox::new(8.0, 40.0, 260.0, 70.0));
}

#[test]
fn test_number_extraction_precedence() {
    for text in ["Q3. What is...", "Question 3 What is...", "3. What is..."] {
        let (number, rest) = parse_question_number(text).expect("题号应能解析");
        assert_eq!(number, 3, "{}", text);
        assert_eq!(rest, "What is...", "{}", text);
    }
}

#[test]
fn test_option_uniqueness() {
    let result = OptionExtractor::default().extract("Pick (1) alpha (1) beta (2) gamma");

    let labels: Vec<&str> = result.items.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["(1)", "(2)"]);
    assert_eq!(result.items[0].text, "alpha");
}

#[test]
fn test_statement_truncation() {
    let result = StatementExtractor::default().extract("Statement (I): A is true. B is false.");

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].text, "A is true");
}

#[test]
fn test_answer_key_override_across_pages() {
    let document = Document::new(
        "Mock",
        vec![
            page(1, &["Q1. Which is a scalar? (1) force (2) work Ans. (2)"]),
            page(2, &["Q2. Pick one (1) a (2) b"]),
            page(3, &["Answer Keys", "1. (3)"]),
        ],
    );

    let data = process_paper(&document, 1, &Config::default());

    assert_eq!(data.questions.len(), 2);
    assert_eq!(data.questions[0].answer_key.as_deref(), Some("3"));
    // 答案页中没有的题号保持原样
    assert_eq!(data.questions[1].answer_key, None);
}

#[test]
fn test_classification_default_and_chemistry() {
    let document = Document::new(
        "Mock",
        vec![page(
            1,
            &[
                "Q1. Which statement is right? (1) yes (2) no",
                "Q2. The molarity of the acid solution is? (1) 1 M (2) 2 M",
            ],
        )],
    );

    let data = process_paper(&document, 1, &Config::default());

    assert_eq!(data.questions[0].subject, Subject::Physics);
    assert_eq!(data.questions[1].subject, Subject::Chemistry);
}

#[test]
fn test_serialized_record_is_camel_case_without_bbox() {
    let document = Document::new("Mock", vec![page(1, &["Q7. Find x if x = 2. Ans. 2"])]);
    let data = process_paper(&document, 1, &Config::default());

    let json = serde_json::to_value(&data).unwrap();
    let question = &json["questions"][0];

    assert_eq!(question["number"], 7);
    assert_eq!(question["questionType"], "numerical");
    assert_eq!(question["answerKey"], "2");
    assert!(question.get("mathExpressions").is_some());
    assert!(question.get("bbox").is_none());
    assert!(json.get("text").is_none());
}

#[tokio::test]
async fn test_load_json_and_toml_documents() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_paper.json"), SAMPLE_JSON).unwrap();
    std::fs::write(dir.path().join("b_paper.toml"), SAMPLE_TOML).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    std::fs::write(dir.path().join("c_broken.json"), "{ not json").unwrap();

    let documents = load_all_documents(dir.path().to_str().unwrap()).await.unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].name, "JEE Main 2024 (27 Jan Shift 1)");
    assert_eq!(documents[0].pages[0].images[0].data, vec![137, 80, 78, 71]);
    // 未写名称时使用文件名
    assert_eq!(documents[1].name, "b_paper");
    assert!(documents[1].file_path.is_some());
}

#[tokio::test]
async fn test_load_document_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.yaml");
    std::fs::write(&path, "pages: []").unwrap();

    assert!(load_document(&path).await.is_err());
}

#[tokio::test]
async fn test_missing_input_folder_is_an_error() {
    assert!(load_all_documents("/definitely/not/here").await.is_err());
}

#[test]
fn test_toml_document_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numerical.toml");
    std::fs::write(&path, SAMPLE_TOML).unwrap();

    let document = tokio_test::block_on(load_document(&path)).unwrap();
    let data = process_paper(&document, 1, &Config::default());

    assert_eq!(data.questions.len(), 1);
    let q = &data.questions[0];
    assert_eq!(q.number, 4);
    assert_eq!(q.question_type, QuestionType::Numerical);
    assert!(q.text.contains("3×10^8/2"));
    assert!(!q.math_expressions.is_empty());
}

#[tokio::test]
async fn test_app_writes_artifacts() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("jee.json"), SAMPLE_JSON).unwrap();

    let config = Config {
        input_folder: input.path().to_string_lossy().to_string(),
        output_folder: output.path().to_string_lossy().to_string(),
        output_log_file: output.path().join("log.txt").to_string_lossy().to_string(),
        max_concurrent_papers: 2,
        ..Config::default()
    };

    let stats = App::initialize(config).await.unwrap().run().await.unwrap();
    assert_eq!(stats.success, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.questions, 1);

    let paper_dir = ArtifactWriter::new(output.path()).paper_dir("JEE Main 2024 (27 Jan Shift 1)");
    let json = std::fs::read_to_string(paper_dir.join(EXTRACTED_DATA_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["questions"][0]["answerKey"], "2");
    assert_eq!(value["questions"][0]["examYear"], 2024);
    assert_eq!(value["images"][0]["path"], "images/page1_img1.png");
    assert!(Path::new(&paper_dir).join("images/page1_img1.png").exists());
}
