//! 节点ID生成器
//!
//! 提供全局唯一的关系节点ID分配机制

use std::sync::atomic::{AtomicI64, Ordering};

/// 节点ID生成器
pub struct RelIdGenerator {
    counter: AtomicI64,
}

impl RelIdGenerator {
    /// 获取全局单例实例
    pub fn instance() -> &'static Self {
        static INSTANCE: RelIdGenerator = RelIdGenerator {
            counter: AtomicI64::new(1), // 0保留为无效ID
        };
        &INSTANCE
    }

    /// 获取下一个唯一ID
    pub fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

/// 为节点分配新ID的便捷函数
pub fn next_rel_id() -> i64 {
    RelIdGenerator::instance().next_id()
}
