/// A file proposed for upload, prior to acceptance.
///
/// Carries only what validation needs: the declared media type is whatever the
/// supplier claims (a browser file input, a filesystem probe) and is not
/// verified against the file contents.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadCandidate {
    pub name: String,
    pub declared_media_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(
        name: impl Into<String>,
        declared_media_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            name: name.into(),
            declared_media_type: declared_media_type.into(),
            size_bytes,
        }
    }
}
