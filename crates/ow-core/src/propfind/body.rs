//! PROPFIND request bodies.

/// Asks only for the internal file id.
pub const FILEID_PROPFIND: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<d:propfind xmlns:d="DAV:">
  <d:prop xmlns:oc="http://owncloud.org/ns">
    <oc:fileid/>
  </d:prop>
</d:propfind>"#;

/// File id, content type and resource type; used to check folders and list media.
pub const MEDIA_PROPFIND: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<d:propfind xmlns:d="DAV:">
  <d:prop xmlns:oc="http://owncloud.org/ns">
    <oc:fileid/>
    <d:getcontenttype/>
    <d:resourcetype/>
  </d:prop>
</d:propfind>"#;
