//! Classification over records produced by the ingest pipeline.

use resect_engine::{CaseReport, Tone, evaluate};
use resect_ingest::{IngestOptions, read_case_collection};
use resect_model::{CaseRecord, Cause, CodedFinding, MetastasisLevel, OverallLevel, VascularLevel};

const HEADER: &str = "model,arterial_variations,artery,vein,inferior_vena_cava,aorta,\
regional_lymph_node,distant_lymph_node,tumor_morphology,tumor_size,adjacent_organ_invasion,\
tumor_location,bile_duct,main_pancreatic_duct,peritoneal_seeding,\
final_hematogenous_metastasis_status,hematogenous_metastasis,final_peritoneal_seeding_status";

fn single_case(row: &str) -> CaseRecord {
    let contents = format!("{HEADER}\n{row}\n");
    let collection =
        read_case_collection(contents.as_bytes(), &IngestOptions::default()).expect("read cases");
    collection.case(1).expect("one case").clone()
}

#[test]
fn celiac_encasement_is_unresectable_for_vascular_reasons() {
    let record = single_case(
        "m,,\"{'celiac_axis': {'status': 'A2', 'ref': 'encases the celiac trunk'}}\",,,,\
,\"{'status': 'LN0', 'ref': ''}\",,,,,,,,H0,,P0",
    );

    let verdict = evaluate(&record);
    assert_eq!(verdict.vascular, VascularLevel::LocallyAdvanced);
    assert_eq!(verdict.metastasis, MetastasisLevel::Resectable);
    assert_eq!(verdict.overall, OverallLevel::Unresectable);
    assert_eq!(verdict.causes, vec![Cause::VascularInvolvement]);
}

#[test]
fn empty_record_is_resectable() {
    let verdict = evaluate(&CaseRecord::default());
    assert_eq!(verdict.overall, OverallLevel::Resectable);
    assert!(verdict.causes.is_empty());
}

#[test]
fn evaluation_is_repeatable() {
    let record = CaseRecord {
        vein: resect_model::Vein {
            superior_mesenteric_vein: CodedFinding::new("V1", "abutment"),
            ..Default::default()
        },
        final_hematogenous_metastasis_status: "H1".to_string(),
        ..CaseRecord::default()
    };
    let first = evaluate(&record);
    assert_eq!(first, evaluate(&record));
    assert_eq!(first.overall, OverallLevel::PotentiallyBorderline);
    assert_eq!(first.causes, vec![Cause::IndeterminateHematogenousMetastasis]);
}

#[test]
fn verdict_serializes_with_display_labels() {
    let record = CaseRecord {
        distant_lymph_node: CodedFinding::new("LN2", "para-aortic"),
        final_peritoneal_seeding_status: "P2".to_string(),
        aorta: CodedFinding::new("A1", ""),
        ..CaseRecord::default()
    };
    insta::assert_json_snapshot!(evaluate(&record), @r#"
    {
      "vascular": "Borderline",
      "metastasis": "Unresectable",
      "overall": "Unresectable",
      "causes": [
        "Distant Lymph Node Involvement",
        "Peritoneal Seeding"
      ]
    }
    "#);
}

fn line<'a>(report: &'a CaseReport, section: &str, label: &str) -> &'a resect_engine::FindingLine {
    report
        .sections
        .iter()
        .find(|candidate| candidate.title == section)
        .and_then(|found| found.lines.iter().find(|line| line.label == label))
        .unwrap_or_else(|| panic!("missing {section} / {label}"))
}

#[test]
fn report_lays_out_four_sections() {
    let report = CaseReport::build(&CaseRecord::default());
    let titles: Vec<&str> = report.sections.iter().map(|section| section.title).collect();
    assert_eq!(
        titles,
        vec![
            "Tumor Characteristics",
            "Vascular Involvement",
            "Metastasis",
            "Overall Resectability",
        ]
    );

    let location = line(&report, "Tumor Characteristics", "Location");
    assert_eq!(location.value, "N/A");
    assert_eq!(location.tone, None);
    let celiac = line(&report, "Vascular Involvement", "Celiac Axis");
    assert_eq!(celiac.value, "N/A");
    assert_eq!(celiac.tone, Some(Tone::Neutral));

    let overall = &report.sections[3];
    assert_eq!(overall.lines.len(), 1);
    assert_eq!(overall.lines[0].value, "Resectable");
    assert_eq!(overall.lines[0].tone, Some(Tone::Favorable));
}

#[test]
fn report_shows_evidence_only_for_abnormal_findings() {
    let record = CaseRecord {
        model: "reader-2".to_string(),
        tumor_size: "2.8".to_string(),
        arterial_variations: CodedFinding::new("VAR9", "not assessed"),
        artery: resect_model::Artery {
            celiac_axis: CodedFinding::new("A0", "clear fat plane"),
            superior_mesenteric_artery: CodedFinding::new("A1", "less than 180 degrees"),
            ..Default::default()
        },
        regional_lymph_node: CodedFinding::new("LN0", "no nodes"),
        bile_duct: CodedFinding::new("D1", "CBD 12 mm"),
        final_hematogenous_metastasis_status: "H1".to_string(),
        hematogenous_metastasis: "4 mm hepatic hypodensity".to_string(),
        final_peritoneal_seeding_status: "P0".to_string(),
        peritoneal_seeding: "no ascites".to_string(),
        ..CaseRecord::default()
    };
    let report = CaseReport::build(&record);
    assert_eq!(report.model, "reader-2");

    assert_eq!(line(&report, "Tumor Characteristics", "Size").value, "2.8 cm");
    let bile = line(&report, "Tumor Characteristics", "Bile Duct");
    assert_eq!(bile.value, "Positive");
    assert_eq!(bile.evidence.as_deref(), Some("CBD 12 mm"));

    let variations = line(&report, "Vascular Involvement", "Arterial Variations");
    assert_eq!(variations.value, "Absent");
    assert_eq!(variations.evidence, None);
    assert_eq!(line(&report, "Vascular Involvement", "Celiac Axis").evidence, None);
    let sma = line(&report, "Vascular Involvement", "Superior Mesenteric Artery");
    assert_eq!(sma.value, "Borderline");
    assert_eq!(sma.tone, Some(Tone::Guarded));
    assert_eq!(sma.evidence.as_deref(), Some("less than 180 degrees"));

    assert_eq!(line(&report, "Metastasis", "Regional Lymph Nodes").evidence, None);
    let hematogenous = line(&report, "Metastasis", "Hematogenous Metastasis");
    assert_eq!(hematogenous.value, "Indeterminate");
    assert_eq!(hematogenous.evidence.as_deref(), Some("4 mm hepatic hypodensity"));
    let peritoneal = line(&report, "Metastasis", "Peritoneal Seeding");
    assert_eq!(peritoneal.value, "Negative");
    assert_eq!(peritoneal.tone, Some(Tone::Favorable));
    assert_eq!(peritoneal.evidence, None);

    let overall = line(&report, "Overall Resectability", "Overall");
    assert_eq!(overall.value, "Potentially Borderline");
    let causes = line(&report, "Overall Resectability", "Causes");
    assert_eq!(causes.value, "Indeterminate Hematogenous Metastasis");
}

#[test]
fn report_passes_unknown_codes_through() {
    let record = CaseRecord {
        aorta: CodedFinding::new("A7", "odd code"),
        ..CaseRecord::default()
    };
    let report = CaseReport::build(&record);
    let aorta = line(&report, "Vascular Involvement", "Aorta");
    assert_eq!(aorta.value, "A7");
    assert_eq!(aorta.tone, Some(Tone::Adverse));
    assert_eq!(aorta.evidence.as_deref(), Some("odd code"));
    assert_eq!(report.verdict.vascular, VascularLevel::Resectable);
}
