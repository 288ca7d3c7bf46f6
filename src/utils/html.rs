// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Typed queries over a parsed HTML page.
//!
//! Every lookup returns `Option`/`Vec` so callers must handle absence
//! explicitly before touching text or attributes.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// 已解析的 HTML 文档
pub struct Document {
    html: Html,
}

/// 文档中的单个元素
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Invalid selector {:?}: {}", css, e);
            None
        }
    }
}

/// Escapes a value for use inside a double-quoted attribute selector.
fn quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// 按标签名和 id 查找元素
    pub fn find_by_id(&self, tag: &str, id: &str) -> Option<Node<'_>> {
        self.find_by_attr(tag, "id", id)
    }

    /// 按标签名和属性值查找第一个匹配的元素
    pub fn find_by_attr(&self, tag: &str, attr: &str, value: &str) -> Option<Node<'_>> {
        let selector = selector(&format!("{}[{}=\"{}\"]", tag, attr, quoted(value)))?;
        self.html
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }
}

impl<'a> Node<'a> {
    /// 第一个匹配标签的后代元素
    pub fn find(&self, tag: &str) -> Option<Node<'a>> {
        let selector = selector(tag)?;
        self.element
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }

    /// 所有匹配标签的后代元素，按文档顺序
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        let Some(selector) = selector(tag) else {
            return Vec::new();
        };
        self.element
            .select(&selector)
            .map(|element| Node { element })
            .collect()
    }

    /// 带有全部给定 class 的后代元素
    ///
    /// `classes` 以空白分隔，例如 `"zztable stats"`
    pub fn find_by_class(&self, tag: &str, classes: &str) -> Option<Node<'a>> {
        let wanted: Vec<&str> = classes.split_whitespace().collect();
        if wanted.is_empty() {
            return None;
        }
        self.find_all(tag).into_iter().find(|node| {
            let value = node.element.value();
            wanted
                .iter()
                .all(|class| value.classes().any(|c| c == *class))
        })
    }

    /// 元素的全部文本，去除首尾空白
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
