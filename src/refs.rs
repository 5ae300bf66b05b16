use pdf_writer::Ref;
use std::collections::HashMap;

/// The indirect objects a document serialization produces
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub(crate) enum ObjKind {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    Content(usize),
    Font(usize),
    CidFont(usize),
    FontDescriptor(usize),
    FontData(usize),
    ToUnicode(usize),
}

/// Allocates and remembers object references over one serialization pass
pub(crate) struct ObjectIds {
    ids: HashMap<ObjKind, Ref>,
    next: i32,
}

impl ObjectIds {
    pub fn new() -> ObjectIds {
        ObjectIds {
            ids: HashMap::new(),
            next: 1,
        }
    }

    pub fn gen(&mut self, kind: ObjKind) -> Ref {
        let id = Ref::new(self.next);
        self.next += 1;
        self.ids.insert(kind, id);
        id
    }

    pub fn get(&self, kind: ObjKind) -> Option<Ref> {
        self.ids.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_recalled() {
        let mut refs = ObjectIds::new();
        let catalog = refs.gen(ObjKind::Catalog);
        let page = refs.gen(ObjKind::Page(0));
        assert_ne!(catalog, page);
        assert_eq!(refs.get(ObjKind::Catalog), Some(catalog));
        assert_eq!(refs.get(ObjKind::Page(1)), None);
    }
}
