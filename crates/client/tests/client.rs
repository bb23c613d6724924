//! End-to-end behaviour of `Client` over a recording transport.

use std::path::PathBuf;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use client::{Client, RecordingTransport};
use moblog::{
    fields, Credentials, MoblogError, MoblogId, Opaque, Param, Procedure, Record, TransportError,
    Value, ValueKind,
};

fn text(s: &str) -> Param {
    Param::from(s)
}

fn client_with(transport: &Arc<RecordingTransport>) -> Client {
    Client::new(Credentials::new("apiKey", "login", "password"), transport.clone())
}

/// A file under the system temp dir, removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn with_contents(bytes: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("moblog-upload-{}.jpg", uuid::Uuid::new_v4()));
        std::fs::write(&path, bytes).unwrap();
        Self(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn moblog_record(title: &str, id: i32, post_to: Option<&str>) -> Value {
    let mut record = Record::new();
    record.insert(fields::TITLE, title);
    record.insert(fields::MOBLOG_ID, id);
    record.insert(fields::URL, format!("http://{title}.textamerica.com"));
    if let Some(address) = post_to {
        record.insert(fields::POST_TO, address);
    }
    Value::Record(record)
}

// ---------------------------------------------------------------------------
// Parameter lists on the wire
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_sends_documented_parameters() {
    let transport = Arc::new(RecordingTransport::new().with_reply("42"));
    let client = client_with(&transport);

    let id = client.update(42, "foo", "bar", "T", "D", 'C', 'Y').await.unwrap();

    assert_eq!(id.as_str(), "42");
    let call = transport.last_call().unwrap();
    assert_eq!(call.procedure, "ta.Moblog.Update");
    assert_eq!(
        call.params,
        vec![
            text("apiKey"),
            text("login"),
            text("password"),
            Param::Int(42),
            text("foo"),
            text("bar"),
            text("T"),
            text("D"),
            text("C"),
            text("Y"),
        ]
    );
}

#[tokio::test]
async fn community_filter_is_omitted_when_unset() {
    let transport = Arc::new(
        RecordingTransport::new()
            .with_reply(Value::List(vec![]))
            .with_reply(Value::List(vec![]))
            .with_reply(Value::List(vec![])),
    );
    let client = client_with(&transport);

    client.get_community_moblogs(None).await.unwrap();
    client.get_community_moblogs(Some("")).await.unwrap();
    client.get_community_moblogs(Some("all")).await.unwrap();

    let arities: Vec<_> = transport.calls().iter().map(|c| c.params.len()).collect();
    assert_eq!(arities, [3, 3, 4]);
    assert_eq!(transport.last_call().unwrap().params[3], text("all"));
}

#[tokio::test]
async fn bare_and_typed_ids_send_identical_parameters() {
    let transport = Arc::new(RecordingTransport::new().with_reply("7").with_reply("7"));
    let client = client_with(&transport);

    client.change_domain(7, "road").await.unwrap();
    client.change_domain(MoblogId::new(7), "road").await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn entry_update_uploads_the_file_as_base64() {
    let bytes: Vec<u8> = (0..100u8).map(|b| b.wrapping_mul(37)).collect();
    let file = TempFile::with_contents(&bytes);
    let transport = Arc::new(RecordingTransport::new().with_reply("555"));
    let client = client_with(&transport);

    let id = client.entry_update(3, 0, "Sunset", "From the pier", 0, &file.0, "JPG").await.unwrap();

    assert_eq!(id.parse_i32(), Some(555));
    let call = transport.last_call().unwrap();
    assert_eq!(call.procedure, "ta.Entry.Update");
    assert_eq!(call.params.len(), 10);

    let encoded = match &call.params[8] {
        Param::Base64(encoded) => encoded,
        other => panic!("expected base64 payload, got {other:?}"),
    };
    assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    assert_eq!(call.params[9], text("JPG"));
}

#[tokio::test]
async fn unreadable_upload_fails_before_any_call() {
    let transport = Arc::new(RecordingTransport::new().with_reply("1"));
    let client = client_with(&transport);
    let missing = std::env::temp_dir().join(format!("moblog-missing-{}.jpg", uuid::Uuid::new_v4()));

    let err = client.entry_update(3, 0, "t", "x", 0, &missing, "JPG").await.unwrap_err();

    assert!(matches!(err, MoblogError::Io { ref path, .. } if *path == missing));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn every_call_leads_with_the_credential_triple() {
    let transport = Arc::new(RecordingTransport::new());
    for _ in 0..6 {
        transport.push(Ok(Value::from("OK")));
    }
    let client = client_with(&transport);

    client.add_keywords(5, "beach,sun").await.unwrap();
    client.bookmarks_delete(4).await.unwrap();
    client.bookmarks_update_url(4, "http://a.example").await.unwrap();
    client.template_update_section(1, "header", "<h1>Hi</h1>").await.unwrap();
    client.set_template(1, 2, 3).await.unwrap();
    client.favorites_assign(1, 0).await.unwrap();

    for call in transport.calls() {
        assert_eq!(
            call.params[..3],
            [text("apiKey"), text("login"), text("password")],
            "{}",
            call.procedure
        );
    }
}

// ---------------------------------------------------------------------------
// Reply narrowing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listings_keep_service_order_and_fields() {
    let reply = Value::List(vec![
        moblog_record("zoo", 2, Some("zoo@post.example")),
        moblog_record("apple", 1, Some("apple@post.example")),
    ]);
    let transport = Arc::new(RecordingTransport::new().with_reply(reply));
    let client = client_with(&transport);

    let moblogs = client.get_community_moblogs(Some("2")).await.unwrap();

    assert_eq!(moblogs.len(), 2);
    assert_eq!(moblogs[0].text(fields::TITLE), Some("zoo"));
    assert_eq!(moblogs[0].text(fields::POST_TO), Some("zoo@post.example"));
    assert_eq!(moblogs[1].get(fields::MOBLOG_ID), Some(&Value::from(1)));
}

#[tokio::test]
async fn scalar_listing_reply_is_a_coercion_error() {
    let transport = Arc::new(RecordingTransport::new().with_reply("OK"));
    let client = client_with(&transport);

    match client.get_my_moblogs().await {
        Err(MoblogError::Coercion(err)) => {
            assert_eq!(err.procedure, Procedure::GetMyMoblogs);
            assert_eq!(err.found, ValueKind::Text);
        }
        other => panic!("expected coercion error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_reply_must_be_text() {
    let transport = Arc::new(RecordingTransport::new().with_reply(Value::Opaque(Opaque::Nil)));
    let client = client_with(&transport);

    let err = client.entry_delete(1, 2).await.unwrap_err();
    assert!(matches!(err, MoblogError::Coercion(ref e) if e.found == ValueKind::Nil));
}

#[tokio::test]
async fn favorites_replies_pass_through_unchanged() {
    let reply = Value::Opaque(Opaque::Boolean(true));
    let transport = Arc::new(RecordingTransport::new().with_reply(reply.clone()));
    let client = client_with(&transport);

    let value = client.favorites_add_moblog(0, "http://zoo.textamerica.com").await.unwrap();
    assert_eq!(value, reply);
}

#[tokio::test]
async fn undocumented_bookmark_replies_pass_through_unchanged() {
    let transport = Arc::new(
        RecordingTransport::new()
            .with_reply(Value::Opaque(Opaque::Int(1)))
            .with_reply(Value::Opaque(Opaque::Nil))
            .with_reply(Value::Opaque(Opaque::Boolean(false)))
            .with_reply("OK"),
    );
    let client = client_with(&transport);

    assert_eq!(client.bookmarks_delete(4).await.unwrap(), Value::Opaque(Opaque::Int(1)));
    assert_eq!(client.bookmarks_unassign(1, 4).await.unwrap(), Value::Opaque(Opaque::Nil));
    assert_eq!(
        client.bookmarks_update_url(4, "http://a.example").await.unwrap(),
        Value::Opaque(Opaque::Boolean(false))
    );
    assert_eq!(
        client.bookmarks_remove_url(4, "http://a.example").await.unwrap(),
        Value::from("OK")
    );
}

// ---------------------------------------------------------------------------
// Transport failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fault_is_reported_as_transport_error() {
    let transport = Arc::new(RecordingTransport::new().with_fault(3, "invalid login"));
    let client = client_with(&transport);

    match client.bookmarks_update(0, "Reading").await {
        Err(MoblogError::Transport { procedure, source }) => {
            assert_eq!(procedure, Procedure::BookmarksUpdate);
            assert_eq!(
                source,
                TransportError::Fault {
                    code: 3,
                    message: "invalid login".into()
                }
            );
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_reply_surfaces_connection_failure() {
    let transport = Arc::new(RecordingTransport::new());
    let client = client_with(&transport);

    let err = client.favorites_update(0, "Friends").await.unwrap_err();
    assert!(matches!(
        err,
        MoblogError::Transport {
            source: TransportError::Connection { .. },
            ..
        }
    ));
}

#[tokio::test]
async fn clients_can_be_shared_across_tasks() {
    let transport = Arc::new(RecordingTransport::new());
    for _ in 0..8 {
        transport.push(Ok(Value::from("OK")));
    }
    let client = client_with(&transport);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.bookmarks_delete(i).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), Value::from("OK"));
    }

    assert_eq!(transport.calls().len(), 8);
}
