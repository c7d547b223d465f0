use anyhow::Result;
use cart_sync::core::KeyValueStore;
use cart_sync::domain::messages::{ADD_FAILED, OUT_OF_STOCK, REMOVE_FAILED};
use cart_sync::{
    AmountUpdate, CartEntry, CartOutcome, CartSession, CartSettings, LocalStorage,
    RecordingNotifier,
};
use httpmock::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

fn settings_for(server: &MockServer, temp_dir: &TempDir) -> CartSettings {
    CartSettings {
        api_base_url: server.base_url(),
        storage_path: temp_dir
            .path()
            .join("cart-storage.json")
            .to_string_lossy()
            .to_string(),
        namespace: "@RocketShoes".to_string(),
        ..CartSettings::default()
    }
}

fn sneaker(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Tênis {}", id),
        "price": 100.0 + id as f64,
        "image": format!("https://rocketseat.example/{}.jpg", id)
    })
}

#[tokio::test]
async fn test_add_until_stock_runs_out() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let stock_mock = server.mock(|when, then| {
        when.method(GET).path("/stock/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 1, "amount": 5}));
    });
    let product_mock = server.mock(|when, then| {
        when.method(GET).path("/products/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sneaker(1));
    });

    let notifier = RecordingNotifier::new();
    let mut session = CartSession::open(&settings_for(&server, &temp_dir), notifier.clone())?;
    let cart = session.cart_mut();

    for _ in 0..5 {
        assert_eq!(cart.add_product(1).await?, CartOutcome::Applied);
    }
    assert_eq!(cart.cart().len(), 1);
    assert_eq!(cart.cart()[0].amount, 5);
    assert!(notifier.is_empty());

    let outcome = cart.add_product(1).await?;
    assert_eq!(
        outcome,
        CartOutcome::OutOfStock {
            requested: 6,
            available: 5
        }
    );
    assert_eq!(cart.cart()[0].amount, 5);
    assert_eq!(notifier.messages(), vec![OUT_OF_STOCK]);

    stock_mock.assert_hits(6);
    product_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_persisted_cart_survives_new_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    for id in 1..=3u64 {
        server.mock(|when, then| {
            when.method(GET).path(format!("/stock/{}", id));
            then.status(200).json_body(serde_json::json!({"amount": 10}));
        });
        server.mock(|when, then| {
            when.method(GET).path(format!("/products/{}", id));
            then.status(200).json_body(sneaker(id));
        });
    }

    let settings = settings_for(&server, &temp_dir);
    let in_memory: Vec<CartEntry> = {
        let mut session = CartSession::open(&settings, RecordingNotifier::new())?;
        let cart = session.cart_mut();
        for id in 1..=3 {
            cart.add_product(id).await?;
        }
        cart.update_product_amount(AmountUpdate {
            product_id: 2,
            amount: 4,
        })
        .await?;
        cart.remove_product(1)?;
        cart.cart().to_vec()
    };

    let reopened = CartSession::open(&settings, RecordingNotifier::new())?;
    assert_eq!(reopened.cart().cart(), in_memory.as_slice());

    let amounts: Vec<(u64, u32)> = in_memory.iter().map(|e| (e.id, e.amount)).collect();
    assert_eq!(amounts, vec![(2, 4), (3, 1)]);

    // 直接檢查存檔內容
    let store = LocalStorage::new(&settings.storage_path);
    let raw = store.get("@RocketShoes:cart")?.expect("saved cart");
    let saved: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(saved[0]["id"], 2);
    assert_eq!(saved[0]["amount"], 4);
    assert_eq!(saved[0]["title"], "Tênis 2");
    assert_eq!(saved[1]["image"], "https://rocketseat.example/3.jpg");
    Ok(())
}

#[tokio::test]
async fn test_catalog_errors_are_reported_not_raised() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/stock/7");
        then.status(200).json_body(serde_json::json!({"amount": 3}));
    });
    let product_mock = server.mock(|when, then| {
        when.method(GET).path("/products/7");
        then.status(404).json_body(serde_json::json!({}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/stock/8");
        then.status(500);
    });

    let settings = settings_for(&server, &temp_dir);
    let notifier = RecordingNotifier::new();
    let mut session = CartSession::open(&settings, notifier.clone())?;
    let cart = session.cart_mut();

    assert_eq!(cart.add_product(7).await?, CartOutcome::TransientFailure);
    assert_eq!(cart.add_product(8).await?, CartOutcome::TransientFailure);
    assert_eq!(cart.remove_product(7)?, CartOutcome::NotFound);

    assert!(cart.cart().is_empty());
    assert_eq!(notifier.messages(), vec![ADD_FAILED, ADD_FAILED, REMOVE_FAILED]);
    product_mock.assert();

    // 沒有成功的變更，就不會寫入存檔
    assert!(!std::path::Path::new(&settings.storage_path).exists());
    Ok(())
}

#[tokio::test]
async fn test_shared_manager_serializes_concurrent_adds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/stock/1");
        then.status(200).json_body(serde_json::json!({"amount": 10}));
    });
    let product_mock = server.mock(|when, then| {
        when.method(GET).path("/products/1");
        then.status(200).json_body(sneaker(1));
    });

    let session = CartSession::open(&settings_for(&server, &temp_dir), RecordingNotifier::new())?;
    let cart = Arc::new(tokio::sync::Mutex::new(session.into_cart()));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let cart = Arc::clone(&cart);
        handles.push(tokio::spawn(async move {
            cart.lock().await.add_product(1).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await??, CartOutcome::Applied);
    }

    let cart = cart.lock().await;
    assert_eq!(cart.cart().len(), 1);
    assert_eq!(cart.cart()[0].amount, 4);
    product_mock.assert_hits(1);
    Ok(())
}
