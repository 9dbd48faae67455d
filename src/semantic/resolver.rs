mod classifier;
mod driver;
mod processor;
mod synonyms;

pub use classifier::{ImportKind, classify};
pub use driver::Resolver;
pub use processor::{BindingContext, DeclarationVisitor, ScopeRequest, SubProcessor, VisitedChild};
pub use synonyms::{
    boolean_getter_name, getter_name, paired_synonyms, setter_name, synonyms,
};
