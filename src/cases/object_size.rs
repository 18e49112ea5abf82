//! オブジェクトサイズ比較ケース
//!
//! 整数フィールドをインラインで持つ構造体と、
//! ヒープ上の子オブジェクト経由で持つ構造体の生成コストを比較

/// 整数フィールドをインラインで保持するオブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatObject {
    value: i32,
}

impl FlatObject {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

/// NestedObjectが排他的に所有する子オブジェクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerObject {
    value: i32,
}

impl InnerObject {
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// 整数フィールドを個別にヒープ確保した子オブジェクト経由で保持するオブジェクト
///
/// 値には必ず所有権を1段たどってアクセスする
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedObject {
    inner: Box<InnerObject>,
}

impl NestedObject {
    pub fn new(value: i32) -> Self {
        Self {
            inner: Box::new(InnerObject { value }),
        }
    }

    pub fn inner(&self) -> &InnerObject {
        &self.inner
    }

    pub fn value(&self) -> i32 {
        self.inner.value()
    }
}

/// FlatObjectケース
pub fn flat_object(init: i32) -> FlatObject {
    FlatObject::new(init)
}

/// NestedObjectケース
pub fn nested_object(init: i32) -> NestedObject {
    NestedObject::new(init)
}
