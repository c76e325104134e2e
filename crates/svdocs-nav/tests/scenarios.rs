//! End-to-end navigation scenarios for both locales.

use pretty_assertions::assert_eq;
use svdocs_nav::{
    Locale, NavError, NavigationModel, PageSet, SidebarNode, SiteManifest, SiteSettings, Target,
    resolve_config,
};

/// Every page the shipped navigation links to, for one locale prefix.
fn published_pages(prefix: &str) -> Vec<String> {
    [
        "guide/getting-started",
        "guide/why",
        "guide/conventions",
        "guide/usage/call",
        "guide/usage/info",
        "guide/attributes/input",
        "guide/attributes/internal",
        "guide/attributes/output",
        "guide/options/advanced",
        "guide/options/dynamic",
        "guide/actions/usage",
        "guide/actions/options",
        "guide/actions/grouping",
        "guide/exceptions/success",
        "guide/exceptions/failure",
        "guide/configuration",
        "guide/extensions",
        "guide/i18n",
        "guide/testing/rspec",
        "releases/2.6",
        "releases/2.5",
        "releases/2.4",
        "releases/2.3",
    ]
    .iter()
    .map(|page| format!("{prefix}{page}"))
    .collect()
}

fn full_page_set() -> PageSet {
    published_pages("")
        .into_iter()
        .chain(published_pages("ru/"))
        .collect()
}

#[test]
fn test_navigation_non_empty_for_every_locale() {
    for locale in Locale::ALL {
        let config = resolve_config(locale.code()).unwrap();
        assert!(!config.navigation.is_empty(), "{locale}");
        assert!(!config.sidebar.is_empty(), "{locale}");
    }
}

#[test]
fn test_resolve_is_idempotent() {
    for locale in Locale::ALL {
        let first = resolve_config(locale.code()).unwrap();
        let second = resolve_config(locale.code()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_unknown_locale_rejected() {
    let err = resolve_config("fr").unwrap_err();
    assert!(matches!(err, NavError::UnknownLocale(ref code) if code == "fr"));

    let model = NavigationModel::new(&SiteSettings::default()).unwrap();
    assert!(matches!(
        model.resolve("fr"),
        Err(NavError::UnknownLocale(_))
    ));
}

#[test]
fn test_en_attributes_input_sidebar() {
    let config = resolve_config("en").unwrap();

    let sidebar = config.sidebar_for("/guide/attributes/input").unwrap();
    let input = sidebar
        .item("Guide")
        .and_then(|guide| guide.child("Attributes"))
        .and_then(|attributes| attributes.child("Input"))
        .unwrap();

    assert_eq!(input.target(), Some("/guide/attributes/input"));
}

#[test]
fn test_ru_attributes_input_sidebar() {
    let config = resolve_config("ru").unwrap();

    let sidebar = config.sidebar_for("/ru/guide/attributes/input").unwrap();
    let trail = sidebar.trail("/ru/guide/attributes/input").unwrap();
    let labels: Vec<_> = trail.iter().map(|node| node.label()).collect();

    assert_eq!(labels, vec!["Руководство", "Атрибуты", "Входящие"]);
    assert_eq!(
        trail.last().and_then(|leaf| leaf.target()),
        Some("/ru/guide/attributes/input")
    );
}

#[test]
fn test_locales_share_structure() {
    fn shape(nodes: &[SidebarNode]) -> Vec<(usize, usize)> {
        nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| {
                std::iter::once((i, node.children().len())).chain(shape(node.children()))
            })
            .collect()
    }

    let en = resolve_config("en").unwrap();
    let ru = resolve_config("ru").unwrap();

    assert_eq!(en.navigation.len(), ru.navigation.len());
    assert_eq!(en.sidebar.len(), ru.sidebar.len());
    for ((_, en_entry), (_, ru_entry)) in en.sidebar.iter().zip(ru.sidebar.iter()) {
        assert_eq!(shape(&en_entry.items), shape(&ru_entry.items));
    }
}

#[test]
fn test_prefixes_are_disjoint() {
    for locale in Locale::ALL {
        let config = resolve_config(locale.code()).unwrap();
        let prefixes: Vec<_> = config.sidebar.iter().map(|(prefix, _)| prefix).collect();
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert!(!a.starts_with(b) && !b.starts_with(a), "{a} vs {b}");
            }
        }
    }
}

#[test]
fn test_every_sidebar_leaf_resolves_to_its_own_tree() {
    for locale in Locale::ALL {
        let config = resolve_config(locale.code()).unwrap();
        for (prefix, entry) in config.sidebar.iter() {
            for leaf in entry.leaves() {
                let target = leaf.target().unwrap();
                let (matched, _) = config.sidebar.resolve(target).unwrap();
                assert_eq!(matched, prefix, "{target}");
            }
        }
    }
}

#[test]
fn test_target_round_trip_to_page_paths() {
    let en = resolve_config("en").unwrap();
    let ru = resolve_config("ru").unwrap();

    let en_target = en
        .targets()
        .into_iter()
        .find(|t| t.target == "/guide/actions/usage")
        .unwrap();
    let ru_target = ru
        .targets()
        .into_iter()
        .find(|t| t.target == "/ru/guide/actions/usage")
        .unwrap();

    assert_eq!(
        Target::parse(en_target.target).and_then(Target::page_path),
        Some("guide/actions/usage".to_owned())
    );
    assert_eq!(
        Target::parse(ru_target.target).and_then(Target::page_path),
        Some("ru/guide/actions/usage".to_owned())
    );
}

#[test]
fn test_full_page_set_validates_cleanly() {
    let model = NavigationModel::new(&SiteSettings::default()).unwrap();

    let report = model.validate(&full_page_set());

    assert!(report.is_ok(), "{:?}", report.errors());
}

#[test]
fn test_missing_russian_page_is_dangling() {
    let pages: PageSet = full_page_set()
        .iter()
        .filter(|page| *page != "ru/guide/attributes/input")
        .map(str::to_owned)
        .collect();
    let model = NavigationModel::new(&SiteSettings::default()).unwrap();

    let report = model.validate(&pages);

    assert_eq!(report.errors().len(), 1);
    match &report.errors()[0] {
        NavError::DanglingLinkTarget {
            locale,
            origin,
            target,
        } => {
            assert_eq!(locale, "ru");
            assert_eq!(origin, "sidebar /ru/guide/");
            assert_eq!(target, "/ru/guide/attributes/input");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_scanned_docs_dir_validates() {
    let dir = tempfile::tempdir().unwrap();
    for page in published_pages("").into_iter().chain(published_pages("ru/")) {
        let file = dir.path().join(format!("{page}.md"));
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "# Page").unwrap();
    }

    let pages = PageSet::scan(dir.path()).unwrap();
    let report = NavigationModel::check(&SiteSettings::default(), Some(&pages));

    assert!(report.is_ok(), "{:?}", report.errors());
}

#[test]
fn test_manifest_export_is_byte_identical() {
    let settings = SiteSettings::default();
    let model = NavigationModel::new(&settings).unwrap();

    let first = SiteManifest::build(&model, &settings).to_json(false).unwrap();
    let second = SiteManifest::build(&model, &settings).to_json(false).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("\"Входящие\""));
}
