//! `dashnav order <number>`: resolve an order number against the API.

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::api::DashboardClient;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::{DashnavError, Result};
use crate::navigator::{get_gql_order_id, is_query_valid_order_number};
use crate::routes::{absolute_url, order_url};

pub async fn cmd_order(number: &str, output: OutputOptions) -> Result<()> {
    if !is_query_valid_order_number(number) {
        return Err(DashnavError::InvalidOrderNumber(number.to_string()));
    }

    let config = Config::load()?;
    let client = DashboardClient::from_config(&config)?;
    let order_id = get_gql_order_id(number);

    let order = client.check_order_exists(&order_id).await?;
    let Some(order) = order else {
        let json_output = json!({
            "number": number,
            "id": order_id,
            "exists": false,
        });
        return CommandOutput::new(json_output)
            .with_text(format!("Order #{} {}", number, "not found".dimmed()))
            .print(output);
    };

    let url = absolute_url(&config.dashboard_url(), &order_url(&order.id));
    let json_output = json!({
        "number": order.number.as_deref().unwrap_or(number),
        "id": order.id,
        "exists": true,
        "status": order.status,
        "url": url,
    });

    let mut text = format!("Order #{}", order.number.as_deref().unwrap_or(number).bold());
    if let Some(status) = &order.status {
        text.push_str(&format!(" [{}]", status.yellow()));
    }
    text.push_str(&format!("\n{}", url.cyan()));

    CommandOutput::new(json_output).with_text(text).print(output)
}
