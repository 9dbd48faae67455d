use logos::Logos;

/// Tokens of an import statement.
///
/// This is the on-demand fallback for files without index stubs; the token
/// set covers exactly the statement forms the language grammar allows:
/// `import [static] a.b.C[.member | .*] [as alias] [;]`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum ImportToken {
    #[token("import")]
    KwImport,

    #[token("static")]
    KwStatic,

    #[token("as")]
    KwAs,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token(";")]
    Semi,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,
}
