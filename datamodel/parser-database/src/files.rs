use diagnostics::{Diagnostics, FileId, Span};
use schema_ast::{SourceFile, ast};

/// The content of the schema source files, together with their parsed
/// syntax trees.
#[derive(Default)]
pub struct Files(pub(crate) Vec<(String, SourceFile, ast::SchemaAst)>);

impl Files {
    /// Parse every file. Syntax errors end up in `diagnostics`.
    pub fn new(files: &[(String, SourceFile)], diagnostics: &mut Diagnostics) -> Self {
        let asts = files
            .iter()
            .enumerate()
            .map(|(file_idx, (file_name, source))| {
                let file_id = FileId(file_idx as u32);
                let ast = schema_ast::parse_schema(source.as_str(), file_id, diagnostics);
                (file_name.clone(), source.clone(), ast)
            })
            .collect();

        Self(asts)
    }

    /// Iterate all parsed files.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &String, &SourceFile, &ast::SchemaAst)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, (name, contents, ast))| (FileId(idx as u32), name, contents, ast))
    }

    /// The name of the file.
    pub fn file_name(&self, file_id: FileId) -> &str {
        &self.0[file_id.0 as usize].0
    }

    /// The source text of the file.
    pub fn source(&self, file_id: FileId) -> &str {
        self.0[file_id.0 as usize].1.as_str()
    }

    /// The 1-based line and column a span starts on, for tooling that
    /// renders its own diagnostics.
    pub fn line_and_column(&self, span: Span) -> (usize, usize) {
        let source = self.source(span.file_id);
        let start = span.start.min(source.len());
        let line_start = source[..start].rfind('\n').map(|pos| pos + 1).unwrap_or(0);
        let line = source[..line_start].matches('\n').count() + 1;

        (line, start - line_start + 1)
    }

    /// Render the given diagnostics with source context, one rendered frame
    /// per error.
    pub fn render_diagnostics(&self, diagnostics: &Diagnostics) -> String {
        let mut out = Vec::new();

        for error in diagnostics.errors() {
            let file_id = error.span().file_id;
            error
                .pretty_print(&mut out, self.file_name(file_id), self.source(file_id))
                .expect("rendering diagnostics to an in-memory buffer cannot fail");
        }

        String::from_utf8(out).expect("diagnostics rendering produced invalid UTF-8")
    }
}

impl std::ops::Index<FileId> for Files {
    type Output = ast::SchemaAst;

    fn index(&self, index: FileId) -> &Self::Output {
        &self.0[index.0 as usize].2
    }
}
