#![allow(clippy::unwrap_used)]
//! On-demand (wildcard) class imports: package enumeration, own-package
//! no-op, hint narrowing, idempotence.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use jasper::semantic::symbol_table::SymbolTable;
use jasper::semantic::types::{DeclarationKind, DeclarationKinds};
use jasper::semantic::{ImportDeclaration, Resolver, ScopeRequest, SubProcessor};
use jasper::syntax::{ImportStub, SourceFile};

fn file_in(package: &str) -> Arc<SourceFile> {
    Arc::new(SourceFile::new(package))
}

fn recording_request(log: &Rc<RefCell<Vec<String>>>) -> ScopeRequest<'static> {
    let sink = Rc::clone(log);
    ScopeRequest::new(vec![SubProcessor::new(move |_, entity, _| {
        sink.borrow_mut().push(entity.qualified_name().to_string());
        true
    })])
}

/// `java.util` with `List` and `Map`.
fn util_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    table.add_package("java.util").unwrap();
    table.add_class("java.util.List").unwrap();
    table.add_class("java.util.Map").unwrap();
    table
}

#[test]
fn wildcard_import_exposes_every_class_of_the_package() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl =
        ImportDeclaration::from_stub(file_in("com.foo"), &ImportStub::new("java.util").on_demand());

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log).with_kinds(DeclarationKind::Class);
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert_eq!(*log.borrow(), ["java.util.List", "java.util.Map"]);
}

#[test]
fn wildcard_import_of_the_own_package_is_a_no_op() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl = ImportDeclaration::from_stub(
        file_in("java.util"),
        &ImportStub::new("java.util").on_demand(),
    );

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log);
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert!(log.borrow().is_empty());
}

#[test]
fn name_hint_narrows_the_package_walk() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl =
        ImportDeclaration::from_stub(file_in("com.foo"), &ImportStub::new("java.util").on_demand());

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log).with_name("Map");
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert_eq!(*log.borrow(), ["java.util.Map"]);

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log).with_name("Set");
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert!(log.borrow().is_empty());
}

#[test]
fn kind_hint_without_classes_skips_the_package_walk() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl =
        ImportDeclaration::from_stub(file_in("com.foo"), &ImportStub::new("java.util").on_demand());

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log)
        .with_kinds(DeclarationKinds::of(&[DeclarationKind::Method, DeclarationKind::Field]));
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert!(log.borrow().is_empty());
}

#[test]
fn unresolved_package_contributes_nothing() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl =
        ImportDeclaration::from_stub(file_in("com.foo"), &ImportStub::new("no.such.pkg").on_demand());

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log);
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert!(log.borrow().is_empty());
}

#[test]
fn a_class_reference_is_not_a_package() {
    // `import java.util.List.*` is a *static* on-demand form only when
    // marked static; as a class wildcard it resolves no package
    let mut table = util_table();
    table.add_package("com.foo").unwrap();
    let resolver = Resolver::new(&table);

    let decl = ImportDeclaration::from_stub(
        file_in("com.foo"),
        &ImportStub::new("java.util.List").on_demand(),
    );

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&log);
    assert!(resolver.process_import_declarations(&decl, &mut request));
    assert!(log.borrow().is_empty());
}

#[test]
fn early_stop_stops_the_package_walk() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl =
        ImportDeclaration::from_stub(file_in("com.foo"), &ImportStub::new("java.util").on_demand());

    let mut seen = 0;
    let mut request = ScopeRequest::new(vec![SubProcessor::new(move |_, _, _| {
        seen += 1;
        false
    })]);
    assert!(!resolver.process_import_declarations(&decl, &mut request));
}

#[test]
fn repeated_wildcard_requests_yield_identical_sequences() {
    let table = util_table();
    let resolver = Resolver::new(&table);

    let decl =
        ImportDeclaration::from_stub(file_in("com.foo"), &ImportStub::new("java.util").on_demand());

    let first = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&first);
    assert!(resolver.process_import_declarations(&decl, &mut request));

    let second = Rc::new(RefCell::new(Vec::new()));
    let mut request = recording_request(&second);
    assert!(resolver.process_import_declarations(&decl, &mut request));

    assert_eq!(*first.borrow(), *second.borrow());
    assert_eq!(first.borrow().len(), 2);
}
