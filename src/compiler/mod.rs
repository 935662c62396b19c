//! 编译模块：把已分类的规则文档转码为Rust静态数据表
pub mod assembler;
pub mod encoder;
pub mod escape;
pub mod preamble;

// 导出核心接口
pub use self::assembler::{AssembledOutput, DocumentAssembler, TableSummary, table_ident, write_output};
pub use self::encoder::RecordEncoder;
pub use self::escape::{EscapeMode, escape};
pub use self::preamble::PREAMBLE;
