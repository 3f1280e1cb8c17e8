// Unit tests for the BeautyMatch core engine

use beautymatch_algo::core::{
    dominant_color_type, matches_dimensions, score_answers, ColorTypeResult, Matcher,
    QuestionFlow, RELAXATION_LEVELS,
};
use beautymatch_algo::models::{
    AnswerSet, Catalog, CatalogItem, ColorType, PreferenceQuery, ProductCategory, Question,
    QuestionKind, QuestionOption,
};
use std::collections::BTreeMap;

fn create_item(
    name: &str,
    skin: &[&str],
    eye: &[&str],
    hair: &[&str],
    face: &[&str],
    occasion: &[&str],
) -> CatalogItem {
    let to_vec = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
    CatalogItem {
        name: name.to_string(),
        brand: "Nordlys".to_string(),
        color: "neutral".to_string(),
        skin_tone: to_vec(skin),
        eye_color: to_vec(eye),
        hair_color: to_vec(hair),
        face_shape: to_vec(face),
        occasion: to_vec(occasion),
        price: 990.0,
        description: None,
        image_url: None,
    }
}

fn create_query() -> PreferenceQuery {
    PreferenceQuery {
        skin_tone: "light".to_string(),
        eye_color: "green".to_string(),
        hair_color: "blonde".to_string(),
        face_shape: "oval".to_string(),
        occasion: "evening".to_string(),
    }
}

fn create_option(id: &str, points: &[(ColorType, i32)]) -> QuestionOption {
    QuestionOption {
        id: id.to_string(),
        text: id.to_string(),
        points: if points.is_empty() {
            None
        } else {
            Some(points.iter().copied().collect::<BTreeMap<_, _>>())
        },
        hex_color: None,
        image_hint: None,
        makeup_tips: None,
        filter_tag: None,
    }
}

fn create_question(
    id: &str,
    order: u32,
    kind: QuestionKind,
    required: bool,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id: id.to_string(),
        order,
        kind,
        text: format!("Question {}", id),
        description: String::new(),
        required,
        max_selections: None,
        options,
    }
}

#[test]
fn test_superset_monotonicity_of_relaxation_levels() {
    // Dropping a dimension can only grow the match set: any item that
    // matches level k must also match every looser level.
    let query = create_query();
    let items = vec![
        create_item("all", &["light"], &["green"], &["blonde"], &["oval"], &["evening"]),
        create_item("no_occasion", &["light"], &["green"], &["blonde"], &["oval"], &["daily"]),
        create_item("no_face", &["light"], &["green"], &["blonde"], &["square"], &["daily"]),
        create_item("no_hair", &["light"], &["green"], &["red"], &["square"], &["daily"]),
        create_item("skin_only", &["light"], &["brown"], &["red"], &["square"], &["daily"]),
        create_item("nothing", &["dark"], &["brown"], &["red"], &["square"], &["daily"]),
    ];

    for item in &items {
        for window in RELAXATION_LEVELS.windows(2) {
            let strict = matches_dimensions(item, window[0], &query);
            let loose = matches_dimensions(item, window[1], &query);
            if strict {
                assert!(loose, "item {} matched a strict level but not a looser one", item.name);
            }
        }
    }
}

#[test]
fn test_monotonic_relaxation_first_hit_level() {
    // If the returned items match at level 3, no item can have matched
    // levels 1 or 2.
    let query = create_query();
    let items = vec![
        create_item("level3_a", &["light"], &["green"], &["blonde"], &["square"], &["daily"]),
        create_item("level5", &["light"], &["brown"], &["red"], &["square"], &["daily"]),
    ];
    let mut catalog = Catalog::new();
    catalog.add_items(ProductCategory::Eyeshadow, items.clone());

    let result = Matcher::with_default_cap().recommend(&query, &catalog);
    let returned = &result.products[&ProductCategory::Eyeshadow];

    assert_eq!(returned.len(), 1);
    assert_eq!(returned[0].name, "level3_a");
    for item in &items {
        for level in &RELAXATION_LEVELS[..2] {
            assert!(!matches_dimensions(item, level, &query));
        }
    }
}

#[test]
fn test_result_cap_holds_for_every_category() {
    let query = create_query();
    let mut catalog = Catalog::new();
    for category in [ProductCategory::Lipstick, ProductCategory::Blush, ProductCategory::Mascara] {
        let items = (0..7)
            .map(|i| {
                create_item(
                    &format!("{} {}", category, i),
                    &["light"],
                    &["green"],
                    &["blonde"],
                    &["oval"],
                    &["evening"],
                )
            })
            .collect();
        catalog.add_items(category, items);
    }

    let matcher = Matcher::with_default_cap();
    let result = matcher.recommend(&query, &catalog);

    for (_, shortlist) in &result.products {
        assert!(shortlist.len() <= matcher.result_cap());
    }
}

#[test]
fn test_occasion_mismatch_falls_to_level_two() {
    // Worked example: X matches everything except the queried occasion,
    // so level 1 fails and level 2 (occasion dropped) returns it.
    let x = create_item(
        "X",
        &["light", "medium"],
        &["green"],
        &["blonde"],
        &["oval"],
        &["daily"],
    );
    let mut catalog = Catalog::new();
    catalog.add_items(ProductCategory::Lipstick, vec![x]);

    let result = Matcher::with_default_cap().recommend(&create_query(), &catalog);

    assert_eq!(result.products[&ProductCategory::Lipstick][0].name, "X");
}

#[test]
fn test_catalog_order_is_preserved_without_ranking() {
    let query = create_query();
    let items = vec![
        create_item("first", &["light"], &["green"], &["blonde"], &["oval"], &["evening"]),
        create_item("second", &["light"], &["green"], &["blonde"], &["oval"], &["evening"]),
        create_item("third", &["light"], &["green"], &["blonde"], &["oval"], &["evening"]),
    ];
    let mut catalog = Catalog::new();
    catalog.add_items(ProductCategory::Blush, items);

    let result = Matcher::with_default_cap().recommend(&query, &catalog);
    let names: Vec<&str> = result.products[&ProductCategory::Blush]
        .iter()
        .map(|item| item.name.as_str())
        .collect();

    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_equal_top_scores_resolve_to_mixed() {
    // Worked example: winter and summer both end at 10.
    let flow = QuestionFlow::new(vec![create_question(
        "palette",
        1,
        QuestionKind::MultiSelect,
        true,
        vec![
            create_option("cold", &[(ColorType::Winter, 10)]),
            create_option("soft", &[(ColorType::Summer, 10)]),
        ],
    )])
    .unwrap();

    let answers = AnswerSet::new().with("palette", vec!["cold".to_string(), "soft".to_string()]);
    let scores = score_answers(&answers, &flow);

    assert_eq!(scores.get(ColorType::Winter), 10);
    assert_eq!(scores.get(ColorType::Summer), 10);
    assert_eq!(dominant_color_type(&scores), ColorTypeResult::Mixed);
}

#[test]
fn test_no_answers_resolve_to_mixed() {
    let flow = QuestionFlow::new(vec![create_question(
        "palette",
        1,
        QuestionKind::SingleSelect,
        true,
        vec![create_option("cold", &[(ColorType::Winter, 10)])],
    )])
    .unwrap();

    let scores = score_answers(&AnswerSet::new(), &flow);
    assert_eq!(dominant_color_type(&scores), ColorTypeResult::Mixed);
}

#[test]
fn test_three_selections_against_max_of_two_fail_validation() {
    let mut question = create_question(
        "shades",
        1,
        QuestionKind::MultiSelect,
        true,
        vec![
            create_option("a", &[]),
            create_option("b", &[]),
            create_option("c", &[]),
        ],
    );
    question.max_selections = Some(2);
    let flow = QuestionFlow::new(vec![question]).unwrap();
    let shades = flow.question_by_id("shades").unwrap();

    let result = flow.validate(
        shades,
        &["a".to_string(), "b".to_string(), "c".to_string()],
    );

    assert!(result.is_err());
}

#[test]
fn test_current_question_follows_lowest_order() {
    let flow = QuestionFlow::new(vec![
        create_question("eye", 1, QuestionKind::SingleSelect, true, vec![create_option("green", &[])]),
        create_question("skin", 2, QuestionKind::SingleSelect, true, vec![create_option("light", &[])]),
    ])
    .unwrap();

    let answers = AnswerSet::new();
    assert_eq!(
        flow.current_question(&answers).question().map(|q| q.id.as_str()),
        Some("eye")
    );

    let answers = flow
        .record(&answers, flow.question_by_id("eye").unwrap(), vec!["green".to_string()])
        .unwrap();
    assert_eq!(
        flow.current_question(&answers).question().map(|q| q.id.as_str()),
        Some("skin")
    );

    let answers = flow
        .record(&answers, flow.question_by_id("skin").unwrap(), vec!["light".to_string()])
        .unwrap();
    assert!(flow.current_question(&answers).is_complete());
}
