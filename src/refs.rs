use pdf_writer::Ref;

/// The kinds of object an exported PDF is made of
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    PageImage(usize),
    ContentForPage(usize),
}

/// Hands out PDF object ids, in order, starting from 1
pub struct ObjectReferences {
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences { next_id: 1 }
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        log::trace!("pdf object {id} is {ref_type:?}");
        Ref::new(id)
    }
}
