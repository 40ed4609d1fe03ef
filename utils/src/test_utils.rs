use core_types::{RawFile, UploadedFile};

/// A candidate that passes the image type filter.
pub fn image_file(name: &str) -> RawFile {
    RawFile::new(name, "image/jpeg", 1024)
}

/// A candidate that is silently dropped by the image type filter.
pub fn document_file(name: &str) -> RawFile {
    RawFile::new(name, "application/pdf", 4096)
}

/// An already accepted photo, e.g. to pre-seed an upload set.
pub fn uploaded_file(id: &str, name: &str) -> UploadedFile {
    UploadedFile {
        id: id.to_string(),
        name: name.to_string(),
        reference: format!("blob:local/{}", id),
        size_bytes: 1024,
    }
}
