//! End-to-end pipeline tests: build a form, generate the bundle, write it
//! out, and check what landed on disk.

use showcase::config::ShowcaseConfig;
use showcase::form::FormState;
use showcase::generate::{ShowcaseBundle, generate, write_bundle};
use std::fs;
use tempfile::TempDir;

fn demo_form() -> FormState {
    FormState {
        repo_url: "https://github.com/alice/cool-app".to_string(),
        project_description: "A collaborative whiteboard for remote teams.".to_string(),
        demo_url: "https://cool-app.example".to_string(),
        tags: "React, TypeScript".to_string(),
        ..FormState::default()
    }
}

#[test]
fn full_pipeline_writes_every_artifact() {
    let tmp = TempDir::new().unwrap();
    let config = ShowcaseConfig::default();
    let form = demo_form();
    form.validate().unwrap();

    let bundle = generate(&form, &config);
    let report = write_bundle(&bundle, tmp.path()).unwrap();

    for filename in [
        "caption-1.txt",
        "caption-2.txt",
        "README.md",
        "readme-preview.html",
        "landing.html",
        "bundle.json",
    ] {
        assert!(tmp.path().join(filename).exists(), "{filename} missing");
    }
    assert_eq!(report.out_dir, tmp.path());
}

#[test]
fn caption_files_match_bundle_order() {
    let tmp = TempDir::new().unwrap();
    let config = ShowcaseConfig::default();
    let form = FormState {
        variations: 3,
        ..demo_form()
    };

    let bundle = generate(&form, &config);
    write_bundle(&bundle, tmp.path()).unwrap();

    for (i, caption) in bundle.linkedin_captions.iter().enumerate() {
        let on_disk = fs::read_to_string(tmp.path().join(format!("caption-{}.txt", i + 1))).unwrap();
        assert_eq!(&on_disk, caption);
    }
    // Only the second caption pitches contributions
    let second = fs::read_to_string(tmp.path().join("caption-2.txt")).unwrap();
    assert!(second.contains("Open source and ready for contributions"));
    let first = fs::read_to_string(tmp.path().join("caption-1.txt")).unwrap();
    assert!(!first.contains("Open source and ready for contributions"));
}

#[test]
fn readme_on_disk_honors_demo_url() {
    let tmp = TempDir::new().unwrap();
    let config = ShowcaseConfig::default();

    let bundle = generate(&demo_form(), &config);
    write_bundle(&bundle, tmp.path()).unwrap();
    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(readme.contains("[View Live Demo](https://cool-app.example)"));

    let without_demo = FormState {
        demo_url: String::new(),
        ..demo_form()
    };
    let bundle = generate(&without_demo, &config);
    write_bundle(&bundle, tmp.path()).unwrap();
    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(!readme.contains("Live Demo"));
}

#[test]
fn landing_page_on_disk_is_self_contained() {
    let tmp = TempDir::new().unwrap();
    let config = ShowcaseConfig::default();

    let bundle = generate(&demo_form(), &config);
    write_bundle(&bundle, tmp.path()).unwrap();

    let html = fs::read_to_string(tmp.path().join("landing.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(!html.contains("<link"));
    assert!(html.matches("cool-app").count() >= 2);
}

#[test]
fn manifest_parses_back_into_the_bundle() {
    let tmp = TempDir::new().unwrap();
    let config = ShowcaseConfig::default();

    let bundle = generate(&demo_form(), &config);
    write_bundle(&bundle, tmp.path()).unwrap();

    let json = fs::read_to_string(tmp.path().join("bundle.json")).unwrap();
    let parsed: ShowcaseBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, bundle);
}

#[test]
fn regeneration_replaces_the_previous_run() {
    let tmp = TempDir::new().unwrap();
    let config = ShowcaseConfig::default();

    let loud = FormState {
        variations: 3,
        ..demo_form()
    };
    write_bundle(&generate(&loud, &config), tmp.path()).unwrap();

    let quiet = FormState {
        variations: 1,
        project_description: "Rewritten.".to_string(),
        ..demo_form()
    };
    write_bundle(&generate(&quiet, &config), tmp.path()).unwrap();

    assert!(!tmp.path().join("caption-2.txt").exists());
    assert!(!tmp.path().join("caption-3.txt").exists());
    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(readme.contains("Rewritten."));
}
