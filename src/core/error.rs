//! 统一错误处理
//!
//! 1. 分派本身不产生错误：`ReverseAccept` 对访问者的错误类型保持泛型，原样传递
//! 2. `RelVisitError` 是供具体访问者使用的现成错误类型
//! 3. `RelError` 覆盖配置、IO 与日志等外围功能；外部错误通过自定义 `From` 转换为字符串

use thiserror::Error;

use crate::rel::RelNode;
use crate::visitor::RelKindTag;

/// 访问者错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelVisitError {
    #[error("不支持的关系节点: {type_name} ({kind})")]
    Unsupported {
        kind: RelKindTag,
        type_name: &'static str,
    },
    #[error("访问错误: {0}")]
    Visit(String),
}

impl RelVisitError {
    /// 为无法处理的节点构造错误
    pub fn unsupported(node: &dyn RelNode) -> Self {
        RelVisitError::Unsupported {
            kind: RelKindTag::of(node),
            type_name: node.type_name(),
        }
    }

    pub fn visit(message: impl Into<String>) -> Self {
        RelVisitError::Visit(message.into())
    }
}

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum RelError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("日志错误: {0}")]
    Logging(String),

    #[error("访问错误: {0}")]
    Visit(#[from] RelVisitError),
}

/// 统一的结果类型
pub type RelResult<T> = Result<T, RelError>;

impl From<toml::de::Error> for RelError {
    fn from(err: toml::de::Error) -> Self {
        RelError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RelError {
    fn from(err: toml::ser::Error) -> Self {
        RelError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for RelError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        RelError::Logging(err.to_string())
    }
}
