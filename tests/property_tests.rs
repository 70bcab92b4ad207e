//! Property-based tests using proptest
//!
//! These tests generate many random inputs to check invariants that should
//! hold for all ids, names and storage base URLs.

mod test_fixtures;

use proptest::prelude::*;
use std::io::Cursor;
use std::sync::Arc;
use uuid::Uuid;

use image_vault::{
    dto::UploadImageRequest,
    domain::value_objects::{ImageId, ImageName},
    infrastructure::storage::{KeyBuilder, ObjectStoreBlobStore},
    ports::{BlobReader, ImageBlobStore, ImageRepository},
    use_cases::{GetImageUseCase, UploadImageUseCase},
};
use object_store::memory::InMemory;
use test_fixtures::{InMemoryImageRepository, STORAGE_URL, TINY_PNG};

const ID_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Strategy for generating random UUIDs
fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<[u8; 16]>().prop_map(Uuid::from_bytes)
}

/// Strategy for generating image names, including non-ASCII text
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,40}|\\PC{1,20}"
}

/// Strategy for generating storage base URLs, with or without trailing slash
fn base_url_strategy() -> impl Strategy<Value = String> {
    "https://[a-z]{1,12}\\.test(/[a-z0-9]{1,8}){0,2}".prop_map(|s| s.to_string())
}

proptest! {
    /// Generated ids have a fixed length, use only the base57 alphabet and
    /// parse back to themselves
    #[test]
    fn generated_ids_are_well_formed(uuid in uuid_strategy()) {
        let id = ImageId::from_uuid(uuid);

        prop_assert_eq!(id.as_str().len(), 22);
        prop_assert!(id.as_str().chars().all(|c| ID_ALPHABET.contains(c)));

        let parsed: ImageId = id.as_str().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// Distinct UUIDs never collapse onto the same id
    #[test]
    fn id_encoding_is_injective(a in uuid_strategy(), b in uuid_strategy()) {
        prop_assume!(a != b);

        prop_assert_ne!(ImageId::from_uuid(a), ImageId::from_uuid(b));
    }

    /// Client supplied ids are accepted only when safe inside an object key
    #[test]
    fn parsed_ids_contain_only_key_safe_characters(s in "\\PC{0,200}") {
        let valid = !s.is_empty()
            && s.len() <= 128
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        prop_assert_eq!(s.parse::<ImageId>().is_ok(), valid);
    }

    /// A trailing slash on the base URL never changes the resulting URL
    #[test]
    fn url_ignores_trailing_slash(base in base_url_strategy(), uuid in uuid_strategy()) {
        let id = ImageId::from_uuid(uuid);
        let bare = KeyBuilder::new(base.clone()).public_url(&id).unwrap();
        let slashed = KeyBuilder::new(format!("{}/", base)).public_url(&id).unwrap();

        prop_assert_eq!(&bare, &slashed);
        prop_assert_eq!(bare, format!("{}/{}.png", base, id));
    }

    /// Names survive validation unchanged
    #[test]
    fn names_are_kept_verbatim(name in name_strategy()) {
        let parsed = ImageName::new(name.clone()).unwrap();

        prop_assert_eq!(parsed.as_str(), name.as_str());
    }

    /// Uploading then fetching returns the uploaded name and the URL the
    /// store derives for the id
    #[test]
    fn upload_then_get_round_trip(name in name_strategy()) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let repo: Arc<dyn ImageRepository> = Arc::new(InMemoryImageRepository::new());
            let blob_store: Arc<dyn ImageBlobStore> =
                Arc::new(ObjectStoreBlobStore::new(Arc::new(InMemory::new()), STORAGE_URL));
            let upload = UploadImageUseCase::new(Arc::clone(&repo), Arc::clone(&blob_store));
            let get = GetImageUseCase::new(Arc::clone(&repo), Arc::clone(&blob_store));

            let reader: BlobReader = Box::pin(Cursor::new(TINY_PNG.to_vec()));
            let uploaded = upload
                .execute(
                    UploadImageRequest {
                        name: name.clone(),
                        content_type: Some("image/png".to_string()),
                    },
                    reader,
                )
                .await
                .unwrap();

            let id: ImageId = uploaded.id.parse().unwrap();
            let fetched = get.execute(&id).await.unwrap();

            prop_assert_eq!(&fetched.name, &name);
            prop_assert_eq!(&fetched.id, &uploaded.id);
            prop_assert_eq!(&fetched.url, &uploaded.url);
            prop_assert_eq!(fetched.url, blob_store.url_for(&id).unwrap());
            Ok(())
        })?;
    }
}
