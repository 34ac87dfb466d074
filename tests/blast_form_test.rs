// ==========================================
// BLAST 导出表单测试
// ==========================================

use linkage_tracks::{SequenceBlastForm, TableExportForm};

#[test]
fn test_form_state_survives_serde() {
    let mut form = SequenceBlastForm::new();
    form.set_sequence_path("Gene.sequence");
    form.base_mut().set_paths_string("Gene.primaryIdentifier,Gene.symbol");
    form.base_mut().include_headers = true;

    let json = serde_json::to_string(&form).unwrap();
    let restored: SequenceBlastForm = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, form);
    assert_eq!(restored.sequence_path(), Some("Gene.sequence"));
    assert_eq!(restored.base().paths.len(), 2);
}

#[test]
fn test_table_export_form_initialise() {
    let mut form = TableExportForm::new();
    form.format = "csv".to_string();
    form.gzip = true;
    form.table = Some("results".to_string());

    form.initialise();
    assert_eq!(form, TableExportForm::default());
}
