//! Demo: replays a short catalog session against the configured product file.

use product_manager::actor::ProductClient;
use product_manager::config::ManagerConfig;
use product_manager::lifecycle::{setup_tracing, ProductSystem};
use product_manager::manager::ProductError;
use product_manager::model::{NewProduct, Product, ProductId};
use tracing::{error, info, warn, Instrument};

/// Logs a rejected request and carries on; stops on anything fatal.
fn report<T>(result: Result<T, ProductError>) -> Result<Option<T>, String> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_fatal() => {
            error!(error = %e, "Fatal product error");
            Err(e.to_string())
        }
        Err(e) => {
            warn!(error = %e, "Request rejected");
            Ok(None)
        }
    }
}

async fn list(client: &ProductClient) -> Result<(), String> {
    if let Some(products) = report(client.get_products().await)? {
        info!(count = products.len(), ?products, "Products");
    }
    Ok(())
}

fn sample(price: f64, code: &str, stock: f64) -> NewProduct {
    NewProduct::new(
        "producto prueba",
        "Este es un producto prueba",
        price,
        "Sin Imagen",
        code,
        stock,
    )
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ManagerConfig::from_env();
    info!(store = %config.store_path.display(), "Starting product manager");

    let system = ProductSystem::start(config)
        .await
        .map_err(|e| e.to_string())?;
    let client = system.product_client.clone();

    list(&client).await?;

    let span = tracing::info_span!("catalog_setup");
    async {
        report(client.add_product(sample(200.0, "abc123", 25.0)).await)?;
        list(&client).await?;
        report(client.add_product(sample(300.0, "abc124", 30.0)).await)?;
        list(&client).await?;
        // Same code as the first product: rejected.
        report(client.add_product(sample(200.0, "abc123", 25.0)).await)?;
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("catalog_edit");
    async {
        if let Some(product) = report(client.get_product_by_id(ProductId(1)).await)? {
            info!(?product, "Found product");
            report(
                client
                    .update_product(Product {
                        stock: 40.0,
                        price: 500.0,
                        ..product
                    })
                    .await,
            )?;
            list(&client).await?;
        }

        report(client.get_product_by_id(ProductId(9)).await)?;

        report(client.delete_product(ProductId(2)).await)?;
        list(&client).await?;
        report(client.delete_product(ProductId(5)).await)?;
        list(&client).await?;
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    drop(client);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed");
    Ok(())
}
