// ==========================================
// 连锁群报告页组件 - BLAST 序列导出表单
// ==========================================
// 在表格导出表单基础上增加选中的序列路径
// ==========================================

use crate::form::table_export_form::TableExportForm;
use serde::{Deserialize, Serialize};

/// BLAST 序列导出表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceBlastForm {
    #[serde(flatten)]
    base: TableExportForm,
    /// 要导出的序列路径 (例如 "Gene.sequence")
    sequence_path: Option<String>,
}

impl SequenceBlastForm {
    pub fn new() -> Self {
        let mut form = Self::default();
        form.initialise();
        form
    }

    /// 重置基础表单并清空序列路径
    pub fn initialise(&mut self) {
        self.base.initialise();
        self.sequence_path = None;
    }

    pub fn set_sequence_path(&mut self, sequence_path: &str) {
        self.sequence_path = Some(sequence_path.to_string());
    }

    pub fn sequence_path(&self) -> Option<&str> {
        self.sequence_path.as_deref()
    }

    pub fn base(&self) -> &TableExportForm {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut TableExportForm {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_initialised() {
        let form = SequenceBlastForm::new();
        assert_eq!(form.sequence_path(), None);
        assert_eq!(form.base().format, "tab");
        assert!(form.base().paths.is_empty());
    }

    #[test]
    fn test_initialise_clears_state() {
        let mut form = SequenceBlastForm::new();
        form.set_sequence_path("Gene.sequence");
        form.base_mut().format = "fasta".to_string();
        form.base_mut().set_paths_string("Gene.primaryIdentifier, ,Gene.length");

        assert_eq!(form.sequence_path(), Some("Gene.sequence"));
        assert_eq!(form.base().paths_string(), "Gene.primaryIdentifier,Gene.length");

        form.initialise();
        assert_eq!(form, SequenceBlastForm::new());
    }

    #[test]
    fn test_serialized_form_is_flat() {
        let mut form = SequenceBlastForm::new();
        form.set_sequence_path("CDS.sequence");

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["format"], "tab");
        assert_eq!(value["sequence_path"], "CDS.sequence");
    }
}
