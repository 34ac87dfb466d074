// ==========================================
// 连锁群报告页组件 - 表单层
// ==========================================
// 职责: 导出相关的表单状态对象
// ==========================================

pub mod sequence_blast_form;
pub mod table_export_form;

pub use sequence_blast_form::SequenceBlastForm;
pub use table_export_form::TableExportForm;
