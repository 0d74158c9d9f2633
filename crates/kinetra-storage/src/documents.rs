//! Typed JSON document operations.
//!
//! Every record is one JSON object at one key. Reads return the ETag so
//! writers can use [`save_document_if_match`] for optimistic locking —
//! when two callers race on the same key, S3's precondition check decides
//! the winner and the loser sees [`StorageError::PreconditionFailed`].

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::StorageError;

const CONTENT_TYPE: &str = "application/json";

/// Load and deserialize a document. Returns the value and its ETag.
pub async fn load_document<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::Get(err.to_string())
            }
        })?;

    let etag = resp.e_tag().unwrap_or_default().to_string();
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::Get(e.to_string()))?
        .into_bytes();

    let value: T = serde_json::from_slice(&body)?;
    Ok((value, etag))
}

/// Serialize and store a document. Returns the new ETag.
pub async fn save_document<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;

    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(CONTENT_TYPE)
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| StorageError::Put(e.into_service_error().to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Store a document only if its ETag still matches `expected_etag`.
pub async fn save_document_if_match<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;

    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(CONTENT_TYPE)
        .body(ByteStream::from(body))
        .if_match(expected_etag)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            // S3 answers 412 Precondition Failed when If-Match misses
            if err.to_string().contains("PreconditionFailed") {
                StorageError::PreconditionFailed {
                    key: key.to_string(),
                }
            } else {
                StorageError::Put(err.to_string())
            }
        })?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Delete a document.
pub async fn delete_document(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(), StorageError> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| StorageError::Delete(e.into_service_error().to_string()))?;

    Ok(())
}

/// List the keys under a prefix, following continuation tokens.
pub async fn list_keys(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::List(e.into_service_error().to_string()))?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    Ok(keys)
}

/// Load every document under a prefix.
///
/// Objects that fail to decode are skipped with a warning rather than
/// failing the whole listing; one corrupt record must not take down a
/// patient list.
pub async fn list_documents<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = list_keys(client, bucket, prefix).await?;
    let mut documents = Vec::with_capacity(keys.len());

    for key in &keys {
        match load_document::<T>(client, bucket, key).await {
            Ok((value, _etag)) => documents.push(value),
            Err(StorageError::Json(e)) => {
                warn!(key = key.as_str(), error = %e, "skipping undecodable document");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(documents)
}
