/// 脚注收集器
///
/// 每次组装文档新建一个，按章节顺序喂入。第 i 个条目对应编号 i+1
#[derive(Debug, Clone, Default)]
pub struct FootnoteCollector {
    counter: u32,
    entries: Vec<String>,
}

impl FootnoteCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条脚注，返回分配的全局编号（从 1 开始）
    pub fn collect(&mut self, text: &str) -> u32 {
        self.counter += 1;
        self.entries.push(text.to_string());
        self.counter
    }

    /// 已分配的最后一个编号，尚未收集时为 0
    pub fn last_number(&self) -> u32 {
        self.counter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 结束收集，取出按编号排列的脚注正文
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
