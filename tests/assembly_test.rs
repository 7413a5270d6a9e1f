use paper_docx::layout::{build_body, build_references};
use paper_docx::models::{Chapter, LayoutProfile, Paper, RunContent, StyledBlock, StyledRun};
use paper_docx::{assemble, diagnose, load_paper, scan_markers, AssemblyError, Conf, FootnoteIssue};

fn english_labels() -> LayoutProfile {
    let mut profile = LayoutProfile::default();
    profile.labels.footnotes = "Footnotes".to_string();
    profile.labels.references = "References".to_string();
    profile
}

fn texts(blocks: &[StyledBlock]) -> Vec<String> {
    blocks.iter().map(StyledBlock::text).collect()
}

#[test]
fn body_scenario_with_two_chapters() {
    let paper = Paper {
        chapters: vec![
            Chapter::new("Chapter 1", "A①B", &["note1"]),
            Chapter::new("Chapter 2", "C", &[]),
        ],
        ..Paper::default()
    };

    let blocks = build_body(&paper, &english_labels()).unwrap();
    assert_eq!(
        texts(&blocks),
        vec!["Chapter 1", "A[1]B", "Chapter 2", "C", "Footnotes", "[1] note1"]
    );
    let runs: Vec<&str> = blocks[1].runs.iter().map(StyledRun::as_str).collect();
    assert_eq!(runs, vec!["A", "[1]", "B"]);
    assert_eq!(blocks[3].runs.len(), 1);
}

#[test]
fn references_scenario() {
    let refs = vec!["Ref A".to_string(), "Ref B".to_string()];
    let blocks = build_references(&refs, &english_labels());
    assert_eq!(texts(&blocks), vec!["References", "[1] Ref A", "[2] Ref B"]);
}

#[test]
fn empty_paper_scenario() {
    let profile = english_labels();
    let paper = Paper::default();
    assert!(build_body(&paper, &profile).unwrap().is_empty());
    assert_eq!(texts(&build_references(&paper.references, &profile)), vec!["References"]);

    let doc = assemble(&paper, &profile).unwrap();
    // 封面 2 + 摘要 3 + 3 + 参考文献标题 1
    assert_eq!(doc.blocks().len(), 9);
    assert_eq!(doc.blocks().last().unwrap().text(), "References");
}

#[test]
fn fixture_paper_assembles_with_global_numbering() {
    let paper = load_paper("tests/test_data/paper.json", &Conf::default()).unwrap();
    assert!(diagnose(&paper).is_empty());

    let doc = assemble(&paper, &LayoutProfile::default()).unwrap();
    let refs: Vec<&str> = doc
        .blocks()
        .iter()
        .flat_map(|b| b.runs.iter())
        .filter(|r| r.style.superscript)
        .map(StyledRun::as_str)
        .collect();
    assert_eq!(refs, vec!["[1]", "[2]", "[3]"]);

    let all = texts(doc.blocks());
    let header = all.iter().position(|t| t == "脚注").unwrap();
    assert_eq!(all[header + 3], "[3] 《明会典》卷二十七。");
    assert_eq!(all[header + 4], "参考文献");
    assert_eq!(all.last().unwrap(), "[2] 吴缉华：《明代海运及运河的研究》，1961年。");

    assert_eq!(doc.footer().runs[0].content, RunContent::PageNumber);
}

#[test]
fn content_is_preserved_around_references() {
    let paper = load_paper("tests/test_data/paper.json", &Conf::default()).unwrap();
    let doc = assemble(&paper, &LayoutProfile::default()).unwrap();

    for chapter in &paper.chapters {
        let block = doc
            .blocks()
            .iter()
            .skip_while(|b| b.text() != chapter.title)
            .nth(1)
            .unwrap();
        let mut symbols = scan_markers(&chapter.content).map(|m| m.marker.symbol().to_string());
        let rebuilt: String = block
            .runs
            .iter()
            .map(|r| {
                if r.style.superscript {
                    symbols.next().unwrap()
                } else {
                    r.as_str().to_string()
                }
            })
            .collect();
        assert_eq!(rebuilt, chapter.content);
    }
}

#[test]
fn chapter_with_markers_but_no_footnotes_is_rejected() {
    let paper = Paper {
        chapters: vec![Chapter::new("坏章", "甲①乙", &[])],
        ..Paper::default()
    };
    assert_eq!(
        diagnose(&paper),
        vec![FootnoteIssue::MissingFootnotes { chapter: 1, markers: 1 }]
    );
    assert_eq!(
        assemble(&paper, &LayoutProfile::default()).unwrap_err(),
        AssemblyError::MalformedFootnoteIndex {
            chapter: 1,
            title: "坏章".to_string(),
            markers: 1,
        }
    );
}
