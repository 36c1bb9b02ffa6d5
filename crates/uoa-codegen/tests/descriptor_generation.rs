//! End-to-end tests for descriptor generation.
//!
//! The `fixtures/builtin` tree holds the reference output for the built-in
//! table; every generated file must match it byte for byte.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use uoa_codegen::{DescriptorGenerator, GeneratedCode};
use uoa_core::{PluginRecord, PluginTable};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/builtin")
}

fn fixture_paths(dir: &Path, prefix: &str, out: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        if entry.file_type().unwrap().is_dir() {
            fixture_paths(&entry.path(), &relative, out);
        } else {
            out.insert(relative);
        }
    }
}

fn generate(table: &PluginTable) -> GeneratedCode {
    DescriptorGenerator::new().unwrap().generate(table).unwrap()
}

#[test]
fn test_builtin_matches_reference_output() {
    let code = generate(&PluginTable::builtin());

    for file in code.files() {
        let expected = fs::read_to_string(fixtures_dir().join(file.path()))
            .unwrap_or_else(|e| panic!("missing fixture {}: {e}", file.path()));
        assert_eq!(file.content(), expected, "mismatch in {}", file.path());
    }
}

#[test]
fn test_builtin_produces_no_extra_files() {
    let code = generate(&PluginTable::builtin());

    let mut expected = BTreeSet::new();
    fixture_paths(&fixtures_dir(), "", &mut expected);

    let generated: BTreeSet<String> = code.paths().into_iter().map(String::from).collect();
    assert_eq!(generated, expected);
}

#[test]
fn test_completeness_counts() {
    let table = PluginTable::builtin();
    let code = generate(&table);

    let providers = code
        .paths()
        .into_iter()
        .filter(|p| p.ends_with(".provider"))
        .count();
    let services = code
        .paths()
        .into_iter()
        .filter(|p| p.ends_with("-im.service"))
        .count();
    let manifests = code
        .paths()
        .into_iter()
        .filter(|p| p.ends_with("Makefile.am"))
        .count();

    assert_eq!(providers, 14);
    assert_eq!(services, 14);
    assert_eq!(manifests, 3);
    assert_eq!(code.file_count(), 2 * table.len() + 3);
}

#[test]
fn test_generation_is_deterministic() {
    let table = PluginTable::builtin();
    assert_eq!(generate(&table), generate(&table));
}

#[test]
fn test_manifests_follow_input_order() {
    let records = PluginTable::builtin().records().to_vec();
    let reversed = PluginTable::new(records.into_iter().rev().collect()).unwrap();
    let code = generate(&reversed);

    let providers = code.get("providers/Makefile.am").unwrap().content();
    let zephyr = providers.find("zephyr.provider").unwrap();
    let aim = providers.find("aim.provider").unwrap();
    assert!(zephyr < aim, "providers manifest was reordered");

    let services = code.get("services/Makefile.am").unwrap().content();
    assert!(services.find("zephyr-im.service").unwrap() < services.find("aim-im.service").unwrap());

    let makefile = code.get("Makefile.am").unwrap().content();
    assert!(makefile.find("\tlibzephyr.la").unwrap() < makefile.find("\tlibaim.la").unwrap());
    assert!(
        makefile.find("libzephyr_la_SOURCES").unwrap() < makefile.find("libaim_la_SOURCES").unwrap()
    );

    // Last entry carries the spaced continuation before $(NULL)
    assert!(makefile.contains("\tlibaim.la \\\n\t$(NULL)"));
}

#[test]
fn test_every_rotation_keeps_order() {
    let records = PluginTable::builtin().records().to_vec();

    for shift in 0..records.len() {
        let mut rotated = records.clone();
        rotated.rotate_left(shift);
        let table = PluginTable::new(rotated.clone()).unwrap();
        let code = generate(&table);

        let expected: Vec<String> = rotated
            .iter()
            .map(|r| format!("providers/{}.provider", r.protocol_id()))
            .collect();
        let actual: Vec<&str> = code
            .paths()
            .into_iter()
            .filter(|p| p.ends_with(".provider"))
            .collect();
        assert_eq!(actual, expected, "rotation {shift}");
    }
}

#[test]
fn test_jabber_field_substitution() {
    let code = generate(&PluginTable::builtin());

    let provider = code.get("providers/jabber.provider").unwrap().content();
    assert!(provider.contains("<provider id=\"jabber\">"));
    assert!(provider.contains("<name>Jabber</name>"));
    assert!(provider.contains("<icon>jabber</icon>"));

    let service = code.get("services/jabber-im.service").unwrap().content();
    assert!(service.contains("<service id=\"jabber-im\">"));
    assert!(service.contains("<type>IM</type>"));
    assert!(service.contains("<name>Jabber</name>"));
    assert!(service.contains("<icon>jabber</icon>"));
    assert!(service.contains("<provider>jabber</provider>"));
    assert!(service.contains("<setting name=\"manager\">gabble</setting>"));
    assert!(service.contains("<setting name=\"protocol\">jabber</setting>"));
}

#[test]
fn test_salut_hyphen_transform() {
    let code = generate(&PluginTable::builtin());
    let makefile = code.get("Makefile.am").unwrap().content();

    assert!(makefile.contains("liblocal_xmpp_la_SOURCES = \\\n"));
    assert!(makefile.contains("liblocal_xmpp_la_LDFLAGS"));
    assert!(makefile.contains("liblocal_xmpp_la_LIBADD"));
    assert!(!makefile.contains("liblocal-xmpp_la"));

    assert!(code.get("providers/local-xmpp.provider").is_some());
    assert!(code.get("services/local-xmpp-im.service").is_some());
}

#[test]
fn test_custom_generated_by() {
    let table = PluginTable::new(vec![
        PluginRecord::parse("IRC", "idle", "irc", "irc").unwrap(),
    ])
    .unwrap();
    let code = DescriptorGenerator::new()
        .unwrap()
        .with_generated_by("packaging/regen")
        .generate(&table)
        .unwrap();

    let makefile = code.get("Makefile.am").unwrap().content();
    assert!(makefile.starts_with("# Generated using packaging/regen\n# Do NOT edit manually\n"));
}

#[test]
fn test_generated_by_is_verbatim_in_xml_comments() {
    let table = PluginTable::new(vec![
        PluginRecord::parse("IRC", "idle", "irc", "irc").unwrap(),
    ])
    .unwrap();
    let code = DescriptorGenerator::new()
        .unwrap()
        .with_generated_by("build&release <ci>")
        .generate(&table)
        .unwrap();

    for path in ["providers/irc.provider", "services/irc-im.service"] {
        let content = code.get(path).unwrap().content();
        assert!(
            content.contains("<!-- Generated using build&release <ci>\n"),
            "{path} escaped the header"
        );
        assert!(!content.contains("&amp;"), "{path}");
    }
}

#[test]
fn test_default_header_matches_checked_in_files() {
    let code = generate(&PluginTable::builtin());
    let makefile = code.get("Makefile.am").unwrap().content();
    assert!(makefile.starts_with(
        "# Generated using empathy/ubuntu-online-accounts/cc-plugins/generate-plugins.py\n"
    ));
}

#[test]
fn test_special_characters_stay_well_formed() {
    let table = PluginTable::new(vec![
        PluginRecord::parse("Q&A <beta>", "haze", "qa", "qa").unwrap(),
    ])
    .unwrap();
    let code = generate(&table);

    let provider = code.get("providers/qa.provider").unwrap().content();
    assert!(provider.contains("<name>Q&amp;A &lt;beta&gt;</name>"));
}
