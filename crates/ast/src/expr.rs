//! Expression nodes: paths, sub-expressions, literals and hash arguments.
use crate::statement::NodeType;
use serde::{Deserialize, Serialize};
use slotbars_types::SourceLocation;

/// Anything that can be a mustache target, a parameter or a hash value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    PathExpression(PathExpression),
    SubExpression(SubExpression),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    BooleanLiteral(BooleanLiteral),
    UndefinedLiteral(UndefinedLiteral),
    NullLiteral(NullLiteral),
}

impl Expr {
    pub fn node_type(&self) -> NodeType {
        match self {
            Expr::PathExpression(_) => NodeType::PathExpression,
            Expr::SubExpression(_) => NodeType::SubExpression,
            Expr::StringLiteral(_) => NodeType::StringLiteral,
            Expr::NumberLiteral(_) => NodeType::NumberLiteral,
            Expr::BooleanLiteral(_) => NodeType::BooleanLiteral,
            Expr::UndefinedLiteral(_) => NodeType::UndefinedLiteral,
            Expr::NullLiteral(_) => NodeType::NullLiteral,
        }
    }

    /// The source text of the expression, where it has one.
    pub fn original(&self) -> Option<&str> {
        match self {
            Expr::PathExpression(p) => Some(&p.original),
            Expr::StringLiteral(s) => Some(&s.original),
            Expr::NumberLiteral(n) => Some(&n.original),
            Expr::BooleanLiteral(b) => Some(&b.original),
            Expr::SubExpression(_) | Expr::UndefinedLiteral(_) | Expr::NullLiteral(_) => None,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Expr::PathExpression(p) => &p.loc,
            Expr::SubExpression(s) => &s.loc,
            Expr::StringLiteral(s) => &s.loc,
            Expr::NumberLiteral(n) => &n.loc,
            Expr::BooleanLiteral(b) => &b.loc,
            Expr::UndefinedLiteral(u) => &u.loc,
            Expr::NullLiteral(n) => &n.loc,
        }
    }

    pub fn as_path(&self) -> Option<&PathExpression> {
        match self {
            Expr::PathExpression(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PathExpression> for Expr {
    fn from(path: PathExpression) -> Self {
        Expr::PathExpression(path)
    }
}

/// A reference into the render context, like `foo.bar`, `../name` or `@index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathExpression {
    /// True for `@`-prefixed data variables.
    pub data: bool,
    /// Number of leading `..` segments.
    pub depth: usize,
    /// Segments kept after `.`, `..` and `this` were elided.
    pub parts: Vec<String>,
    /// The path as written, separators included.
    pub original: String,
    pub loc: SourceLocation,
}

impl PathExpression {
    /// Rebuilds a textual path from `data`, `depth` and `parts`.
    ///
    /// This matches `original` for paths written with `../` runs followed by
    /// `.`-separated segments, which is the normal form the compiler emits.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        if self.data {
            out.push('@');
        }
        for _ in 0..self.depth {
            out.push_str("../");
        }
        if self.parts.is_empty() {
            if out.ends_with('/') {
                out.pop();
            }
        } else {
            out.push_str(&self.parts.join("."));
        }
        out
    }
}

/// Serde adapter for a `PathExpression` held directly by a statement rather
/// than through [`Expr`], so it still carries `"type": "PathExpression"`.
pub(crate) mod tagged_path {
    use super::PathExpression;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    #[serde(tag = "type")]
    enum Borrowed<'a> {
        PathExpression(&'a PathExpression),
    }

    #[derive(Deserialize)]
    #[serde(tag = "type")]
    enum Owned {
        PathExpression(PathExpression),
    }

    pub fn serialize<S: Serializer>(path: &PathExpression, serializer: S) -> Result<S::Ok, S::Error> {
        Borrowed::PathExpression(path).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathExpression, D::Error> {
        let Owned::PathExpression(path) = Owned::deserialize(deserializer)?;
        Ok(path)
    }
}

/// A parenthesized helper call used as an argument, like `(concat a b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubExpression {
    pub path: Box<Expr>,
    pub params: Vec<Expr>,
    pub hash: Option<Hash>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub original: String,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: f64,
    pub original: String,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub original: String,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndefinedLiteral {
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullLiteral {
    pub loc: SourceLocation,
}

/// Named arguments, `key=value`. Key uniqueness is left to the grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Hash {
    pub pairs: Vec<HashPair>,
    pub loc: SourceLocation,
}

impl Hash {
    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.pairs.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct HashPair {
    pub key: String,
    pub value: Expr,
    pub loc: SourceLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(data: bool, depth: usize, parts: &[&str], original: &str) -> PathExpression {
        PathExpression {
            data,
            depth,
            parts: parts.iter().map(|p| p.to_string()).collect(),
            original: original.to_string(),
            loc: SourceLocation::default(),
        }
    }

    #[test]
    fn test_canonical_rebuilds_relative_path() {
        let p = path(false, 2, &["foo", "bar"], "../../foo.bar");
        assert_eq!(p.canonical(), p.original);
    }

    #[test]
    fn test_canonical_of_bare_parent_reference() {
        assert_eq!(path(false, 1, &[], "..").canonical(), "..");
        assert_eq!(path(false, 2, &[], "../..").canonical(), "../..");
    }

    #[test]
    fn test_canonical_data_path() {
        let p = path(true, 0, &["root", "title"], "@root.title");
        assert_eq!(p.canonical(), "@root.title");
    }

    #[test]
    fn test_canonical_normalizes_separators_and_this() {
        // Slash separators and an explicit `this` are not kept in the parts,
        // so these come back in dotted normal form.
        assert_eq!(path(false, 0, &["a", "b"], "a/b").canonical(), "a.b");
        assert_eq!(path(false, 0, &["foo"], "this.foo").canonical(), "foo");
        assert_eq!(path(false, 0, &["foo"], "./foo").canonical(), "foo");
    }

    #[test]
    fn test_expr_serializes_with_type_tag() {
        let expr = Expr::from(path(false, 0, &["name"], "name"));
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["type"], "PathExpression");
        assert_eq!(json["original"], "name");
        assert_eq!(json["parts"][0], "name");
    }

    #[test]
    fn test_hash_lookup() {
        let hash = Hash {
            pairs: vec![HashPair {
                key: "class".into(),
                value: Expr::StringLiteral(StringLiteral {
                    value: "wide".into(),
                    original: "wide".into(),
                    loc: SourceLocation::default(),
                }),
                loc: SourceLocation::default(),
            }],
            loc: SourceLocation::default(),
        };
        assert_eq!(hash.get("class").and_then(Expr::original), Some("wide"));
        assert!(hash.get("missing").is_none());

        let json = serde_json::to_value(&hash).unwrap();
        assert_eq!(json["type"], "Hash");
        assert_eq!(json["pairs"][0]["type"], "HashPair");
        assert_eq!(json["pairs"][0]["value"]["type"], "StringLiteral");
        let back: Hash = serde_json::from_value(json).unwrap();
        assert_eq!(back, hash);
    }
}
