/// Shader sources and a light reflection pass over their declarations
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0, multispace1, none_of, not_line_ending},
    combinator::{all_consuming, map, opt, recognize, value},
    multi::{many0, many1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

pub const ATTR_VERTEX_POSITION: &str = "aVertexPosition";
pub const ATTR_VERTEX_COLOR: &str = "aVertexColor";
pub const UNIFORM_PROJECTION_MATRIX: &str = "uProjectionMatrix";
pub const UNIFORM_MODEL_VIEW_MATRIX: &str = "uModelViewMatrix";

/// Transforms the 2D position by projection * model-view and forwards the color
pub const VERTEX_SHADER_SOURCE: &str = r#"
attribute vec4 aVertexPosition;
attribute vec4 aVertexColor;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

varying lowp vec4 vColor;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vColor = aVertexColor;
}
"#;

/// Writes the interpolated vertex color
pub const FRAGMENT_SHADER_SOURCE: &str = r#"
varying lowp vec4 vColor;

void main() {
    gl_FragColor = vColor;
}
"#;

/// A vertex/fragment source pair
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl Default for ShaderSources<'static> {
    fn default() -> Self {
        Self {
            vertex: VERTEX_SHADER_SOURCE,
            fragment: FRAGMENT_SHADER_SOURCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Storage {
    Attribute,
    Uniform,
    Varying,
}

#[derive(Debug, Clone, PartialEq)]
enum Item<'a> {
    Precision,
    Declaration(Storage, &'a str),
    Main,
}

/// Attribute and uniform names declared at global scope of a GLSL ES 1.00 shader.
///
/// Only understands the subset the tutorial shaders use: precision
/// statements, attribute/uniform/varying declarations and `void main()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderInterface {
    pub attributes: Vec<String>,
    pub uniforms: Vec<String>,
}

/// Why reflection gave up; lines are 1-based
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectError {
    #[error("unexpected input on line {line}")]
    Syntax { line: usize },
    #[error("missing `void main()`")]
    MissingMain,
}

impl ShaderInterface {
    pub fn parse(source: &str) -> Result<Self, ReflectError> {
        let (_, items) = parse_translation_unit(source).map_err(|e| {
            let rest = match e {
                nom::Err::Error(err) | nom::Err::Failure(err) => err.input,
                nom::Err::Incomplete(_) => "",
            };
            let consumed = &source[..source.len() - rest.len()];
            ReflectError::Syntax {
                line: consumed.matches('\n').count() + 1,
            }
        })?;

        if !items.contains(&Item::Main) {
            return Err(ReflectError::MissingMain);
        }

        let mut interface = Self::default();
        for item in items {
            match item {
                Item::Declaration(Storage::Attribute, name) => interface.attributes.push(name.to_string()),
                Item::Declaration(Storage::Uniform, name) => interface.uniforms.push(name.to_string()),
                _ => {}
            }
        }
        Ok(interface)
    }

    pub fn declares_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    pub fn declares_uniform(&self, name: &str) -> bool {
        self.uniforms.iter().any(|u| u == name)
    }
}

fn parse_translation_unit(input: &str) -> IResult<&str, Vec<Item<'_>>> {
    all_consuming(terminated(many0(preceded(skip, parse_item)), skip))(input)
}

/// Whitespace, line comments and preprocessor lines
fn skip(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), pair(tag("//"), not_line_ending)),
            value((), pair(char('#'), not_line_ending)),
        ))),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn precision_qualifier(input: &str) -> IResult<&str, &str> {
    terminated(alt((tag("lowp"), tag("mediump"), tag("highp"))), multispace1)(input)
}

fn storage_qualifier(input: &str) -> IResult<&str, Storage> {
    terminated(
        alt((
            value(Storage::Attribute, tag("attribute")),
            value(Storage::Uniform, tag("uniform")),
            value(Storage::Varying, tag("varying")),
        )),
        multispace1,
    )(input)
}

fn parse_item(input: &str) -> IResult<&str, Item<'_>> {
    alt((parse_precision, parse_declaration, parse_main))(input)
}

fn parse_precision(input: &str) -> IResult<&str, Item<'_>> {
    value(
        Item::Precision,
        tuple((
            terminated(tag("precision"), multispace1),
            precision_qualifier,
            identifier,
            multispace0,
            char(';'),
        )),
    )(input)
}

fn parse_declaration(input: &str) -> IResult<&str, Item<'_>> {
    map(
        tuple((
            storage_qualifier,
            opt(precision_qualifier),
            terminated(identifier, multispace1),
            identifier,
            multispace0,
            char(';'),
        )),
        |(storage, _, _, name, _, _)| Item::Declaration(storage, name),
    )(input)
}

fn parse_main(input: &str) -> IResult<&str, Item<'_>> {
    value(
        Item::Main,
        tuple((
            terminated(tag("void"), multispace1),
            tag("main"),
            multispace0,
            delimited(char('('), multispace0, char(')')),
            multispace0,
            parse_block,
        )),
    )(input)
}

/// `{ ... }` with balanced nested braces
fn parse_block(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('{'),
        many0(alt((parse_block, recognize(many1(none_of("{}")))))),
        char('}'),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_interface() {
        let interface = ShaderInterface::parse(VERTEX_SHADER_SOURCE).unwrap();
        assert_eq!(interface.attributes, vec![ATTR_VERTEX_POSITION, ATTR_VERTEX_COLOR]);
        assert_eq!(
            interface.uniforms,
            vec![UNIFORM_MODEL_VIEW_MATRIX, UNIFORM_PROJECTION_MATRIX]
        );
    }

    #[test]
    fn test_fragment_interface() {
        let interface = ShaderInterface::parse(FRAGMENT_SHADER_SOURCE).unwrap();
        assert!(interface.attributes.is_empty());
        assert!(interface.uniforms.is_empty());
    }

    #[test]
    fn test_comments_precision_and_directives() {
        let source = "#ifdef GL_ES\nprecision mediump float;\n#endif\n\
                      // tint\nuniform lowp vec4 uTint;\n\
                      void main() { if (true) { gl_FragColor = uTint; } }";
        let interface = ShaderInterface::parse(source).unwrap();
        assert_eq!(interface.uniforms, vec!["uTint"]);
        assert!(interface.declares_uniform("uTint"));
        assert!(!interface.declares_attribute("uTint"));
    }

    #[test]
    fn test_missing_semicolon_reports_line() {
        let source = "attribute vec4 aPos;\nuniform mat4 uMvp\nvoid main() { }";
        assert_eq!(
            ShaderInterface::parse(source),
            Err(ReflectError::Syntax { line: 2 })
        );
    }

    #[test]
    fn test_unbalanced_body() {
        let source = "void main() { gl_FragColor = vec4(1.0);";
        assert!(matches!(
            ShaderInterface::parse(source),
            Err(ReflectError::Syntax { .. })
        ));
    }

    #[test]
    fn test_missing_main() {
        assert_eq!(
            ShaderInterface::parse("uniform mat4 uMvp;"),
            Err(ReflectError::MissingMain)
        );
    }
}
