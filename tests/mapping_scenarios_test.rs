use ivr_mapper::{
    compute_stats, join_prompts, normalize_ivr_name, unmapped_ivr_names, CampaignIndex,
    CampaignRecord, PromptRecord,
};

fn campaign_rows(rows: &[(&str, &str)]) -> Vec<CampaignRecord> {
    rows.iter()
        .map(|(ivr, campaigns)| CampaignRecord::new(*ivr, *campaigns))
        .collect()
}

fn prompt_rows(rows: &[(&str, &str)]) -> Vec<PromptRecord> {
    rows.iter()
        .map(|(ivr, prompt)| PromptRecord::new(*ivr, *prompt))
        .collect()
}

#[test]
fn test_scenario_suffix_variants_match() {
    let campaigns = campaign_rows(&[("CampA.five9ivr", "X"), ("CampB", "Y")]);
    let prompts = prompt_rows(&[
        ("CampA.five9ivr", "P1"),
        ("CampB.five9ivr", "P2"),
        ("CampC", "P3"),
    ]);

    let index = CampaignIndex::build(&campaigns);
    let results = join_prompts(&index, &prompts);

    let rows: Vec<(String, String, String)> = results
        .iter()
        .map(|r| {
            (
                r.ivr_name.clone(),
                r.prompt_name.clone(),
                r.associated_campaigns.clone(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("CampA.five9ivr".into(), "P1".into(), "X".into()),
            ("CampB.five9ivr".into(), "P2".into(), "Y".into()),
            ("CampC".into(), "P3".into(), "".into()),
        ]
    );

    let stats = compute_stats(&results);
    assert_eq!(stats.unmapped, 1);
    assert_eq!(unmapped_ivr_names(&results), vec!["CampC"]);
}

#[test]
fn test_scenario_duplicate_names_last_write_wins() {
    let campaigns = campaign_rows(&[("CampA", "X"), ("CampA.five9ivr", "Z")]);
    let index = CampaignIndex::build(&campaigns);

    assert_eq!(index.get("CampA"), Some("Z"));
    assert_eq!(index.get("CampA.five9ivr"), Some("Z"));
}

#[test]
fn test_scenario_null_campaign_is_excluded() {
    let campaigns = vec![
        CampaignRecord {
            ivr_name: Some("CampA".to_string()),
            associated_campaigns: None,
        },
        CampaignRecord::new("CampB", "Y"),
    ];
    let prompts = prompt_rows(&[("CampA", "P1"), ("CampB", "P2")]);

    let index = CampaignIndex::build(&campaigns);
    assert_eq!(index.len(), 2);

    let results = join_prompts(&index, &prompts);
    assert_eq!(results[0].associated_campaigns, "");
    assert_eq!(unmapped_ivr_names(&results), vec!["CampA"]);
}

#[test]
fn test_scenario_empty_prompt_source() {
    let campaigns = campaign_rows(&[("CampA", "X")]);
    let results = join_prompts(&CampaignIndex::build(&campaigns), &[]);

    let stats = compute_stats(&results);
    assert!(results.is_empty());
    assert_eq!((stats.total, stats.mapped, stats.unmapped), (0, 0, 0));
}

#[test]
fn test_index_holds_both_forms_for_every_valid_record() {
    let campaigns = campaign_rows(&[
        ("  Spaced.five9ivr ", "S"),
        ("Plain", "P"),
        ("Double.five9ivr.five9ivr", "D"),
    ]);
    let index = CampaignIndex::build(&campaigns);

    for record in &campaigns {
        let base = normalize_ivr_name(record.ivr_name.as_deref().unwrap());
        let expected = record.associated_campaigns.as_deref();
        assert_eq!(index.get(&base), expected);
        assert_eq!(index.get(&format!("{}.five9ivr", base)), expected);
    }
    assert_eq!(index.len(), 2 * campaigns.len());
}

#[test]
fn test_output_is_one_to_one_with_prompts() {
    let campaigns = campaign_rows(&[("A", "X")]);
    let prompts = prompt_rows(&[("A", "1"), ("A", "2"), ("B", "3"), ("A.five9ivr", "4")]);

    let results = join_prompts(&CampaignIndex::build(&campaigns), &prompts);
    assert_eq!(results.len(), prompts.len());
    for (result, prompt) in results.iter().zip(&prompts) {
        assert_eq!(result.ivr_name, prompt.ivr_name);
        assert_eq!(result.prompt_name, prompt.prompt_name);
    }

    let stats = compute_stats(&results);
    assert_eq!(stats.mapped + stats.unmapped, stats.total);
}
