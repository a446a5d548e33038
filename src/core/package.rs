// Update package extraction. A package value exists only after its checksum matched.
use crate::core::checksum::ChecksumAlgorithm;
use crate::core::document::ResponseDocument;
use crate::core::error::{Error, ErrorKind};
use serde::Serialize;

const CONTENT_PATH: &str = "/data/plugin/plugin";
const CHECKSUM_PATH: &str = "/data/plugin/md5";
const VERSION_PATH: &str = "/data/plugin/version";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UpdatePackage {
    content: String,
    version: String,
    checksum: String,
}

impl UpdatePackage {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Checksum as declared by the backend (and confirmed locally).
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl ResponseDocument {
    /// Extracts a verified update package, or `None` when the response carries no usable one.
    pub fn build_update_package(&self) -> Option<UpdatePackage> {
        self.inspect_update_package().ok()
    }

    pub fn build_update_package_with(
        &self,
        algorithm: &dyn ChecksumAlgorithm,
    ) -> Option<UpdatePackage> {
        self.inspect_update_package_with(algorithm).ok()
    }

    /// Like [`ResponseDocument::build_update_package`], but reports why no package was produced.
    pub fn inspect_update_package(&self) -> Result<UpdatePackage, Error> {
        self.inspect_update_package_with(self.checksum_kind().algorithm())
    }

    pub fn inspect_update_package_with(
        &self,
        algorithm: &dyn ChecksumAlgorithm,
    ) -> Result<UpdatePackage, Error> {
        let content = self.require_string(CONTENT_PATH)?;
        let checksum = self.require_string(CHECKSUM_PATH)?;
        let computed = algorithm.checksum(content.as_bytes());
        if computed != checksum {
            return Err(Error::new(ErrorKind::Integrity)
                .with_message("package checksum mismatch")
                .with_path(CHECKSUM_PATH));
        }
        let version = self.require_string(VERSION_PATH)?;
        Ok(UpdatePackage {
            content,
            version,
            checksum,
        })
    }

    fn require_string(&self, path: &str) -> Result<String, Error> {
        self.fetch_string(path)
            .ok_or_else(|| Error::new(ErrorKind::FieldAbsent).with_path(path))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::checksum::{ChecksumAlgorithm, ChecksumKind, Md5Checksum, Sha256Checksum};
    use crate::core::document::ResponseDocument;
    use crate::core::error::ErrorKind;
    use crate::core::options::DecodeOptions;
    use serde_json::json;

    fn plugin_body(content: &str, checksum: &str, version: Option<&str>) -> String {
        let mut plugin = json!({ "plugin": content, "md5": checksum });
        if let Some(version) = version {
            plugin["version"] = json!(version);
        }
        json!({ "status": 0, "data": { "plugin": plugin } }).to_string()
    }

    #[test]
    fn verified_package_is_built() {
        let content = "const plugin = new RASP('official')";
        let checksum = Md5Checksum.checksum(content.as_bytes());
        let body = plugin_body(content, &checksum, Some("2024-01-01"));
        let doc = ResponseDocument::new(200, "", body);
        let package = doc.build_update_package().expect("package");
        assert_eq!(package.content(), content);
        assert_eq!(package.version(), "2024-01-01");
        assert_eq!(package.checksum(), checksum);
    }

    #[test]
    fn missing_fields_report_the_path() {
        let doc = ResponseDocument::new(200, "", r#"{"data":{"plugin":{"plugin":"x"}}}"#);
        let err = doc.inspect_update_package().expect_err("err");
        assert_eq!(err.kind(), ErrorKind::FieldAbsent);
        assert_eq!(err.path(), Some("/data/plugin/md5"));
    }

    #[test]
    fn checksum_is_checked_before_version() {
        let doc = ResponseDocument::new(200, "", plugin_body("x", "0000", None));
        let err = doc.inspect_update_package().expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn checksum_comparison_is_exact() {
        let upper = Md5Checksum.checksum(b"x").to_ascii_uppercase();
        let doc = ResponseDocument::new(200, "", plugin_body("x", &upper, Some("1")));
        assert!(doc.build_update_package().is_none());
    }

    #[test]
    fn configured_algorithm_is_used() {
        let checksum = Sha256Checksum.checksum(b"x");
        let body = plugin_body("x", &checksum, Some("1"));
        let doc = ResponseDocument::new(200, "", body.clone());
        assert!(doc.build_update_package().is_none());

        let options = DecodeOptions::new().with_checksum(ChecksumKind::Sha256);
        let doc = ResponseDocument::with_options(200, "", body, &options);
        assert!(doc.build_update_package().is_some());
    }

    #[test]
    fn injected_algorithm_overrides_configuration() {
        let doc = ResponseDocument::new(200, "", plugin_body("x", "len:1", Some("1")));
        let by_len = |content: &[u8]| format!("len:{}", content.len());
        let package = doc.build_update_package_with(&by_len).expect("package");
        assert_eq!(package.checksum(), "len:1");
        assert!(doc.build_update_package().is_none());
    }
}
