//! Wire models for order and article endpoints.

use crate::{
    api::wire::{self, Reference, StatusWire},
    order::domain::{
        Article, Order, OrderId, OrderLine, PersistedOrderData, PersistedOrderLineData,
    },
    reference::{ArticleId, CategoryId, ClientId, CollaboratorId, StatusCode},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order line as embedded in an order document.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct OrderLineRecord {
    article: Reference,
    #[serde(default)]
    quantite_cmd: u32,
    #[serde(default)]
    quantite_valid: u32,
    #[serde(default)]
    quantite_confr: u32,
    #[serde(default)]
    statut_ligne: Option<StatusWire>,
    #[serde(default)]
    remarque: Option<String>,
}

impl From<OrderLineRecord> for OrderLine {
    fn from(record: OrderLineRecord) -> Self {
        Self::from_persisted(PersistedOrderLineData {
            article: ArticleId::new(record.article.into_id()),
            ordered: record.quantite_cmd,
            validated: record.quantite_valid,
            confirmed: record.quantite_confr,
            status: record.statut_ligne.map_or_else(StatusCode::pending, |status| {
                StatusCode::new(status.into_code())
            }),
            notes: record.remarque,
        })
    }
}

/// Order document returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct OrderRecord {
    #[serde(rename = "_id")]
    id: String,
    collaborateur: Reference,
    client: Reference,
    #[serde(deserialize_with = "wire::date")]
    date_commande: NaiveDate,
    #[serde(default, deserialize_with = "wire::optional_date")]
    date_livraison: Option<NaiveDate>,
    #[serde(default)]
    remarque: Option<String>,
    #[serde(default)]
    statut_commande: Option<StatusWire>,
    #[serde(default)]
    lignes: Vec<OrderLineRecord>,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self::from_persisted(PersistedOrderData {
            id: OrderId::new(record.id),
            collaborator: CollaboratorId::new(record.collaborateur.into_id()),
            client: ClientId::new(record.client.into_id()),
            order_date: record.date_commande,
            delivery_date: record.date_livraison,
            notes: record.remarque,
            status: record
                .statut_commande
                .map(|status| StatusCode::new(status.into_code())),
            lines: record.lignes.into_iter().map(OrderLine::from).collect(),
        })
    }
}

/// Line inside the body of `POST /orders` and `PATCH /orders/{id}`.
#[derive(Debug, Serialize)]
pub(super) struct OrderLineBody<'a> {
    article: &'a str,
    quantite_cmd: u32,
    quantite_valid: u32,
    quantite_confr: u32,
    statut_ligne: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarque: Option<&'a str>,
}

/// Body of `POST /orders` and `PATCH /orders/{id}`.
#[derive(Debug, Serialize)]
pub(super) struct OrderBody<'a> {
    collaborateur: &'a str,
    client: &'a str,
    date_commande: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_livraison: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarque: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statut_commande: Option<&'a str>,
    lignes: Vec<OrderLineBody<'a>>,
}

impl<'a> From<&'a Order> for OrderBody<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            collaborateur: order.collaborator().as_str(),
            client: order.client().as_str(),
            date_commande: order.order_date(),
            date_livraison: order.delivery_date(),
            remarque: order.notes(),
            statut_commande: order.status().map(StatusCode::as_str),
            lignes: order
                .lines()
                .iter()
                .map(|line| OrderLineBody {
                    article: line.article().as_str(),
                    quantite_cmd: line.ordered(),
                    quantite_valid: line.validated(),
                    quantite_confr: line.confirmed(),
                    statut_ligne: line.status().as_str(),
                    remarque: line.notes(),
                })
                .collect(),
        }
    }
}

/// Article document returned by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ArticleRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    code_article: String,
    designation: String,
    #[serde(default)]
    categorie: Option<Reference>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        let article = Self::new(
            ArticleId::new(record.id),
            record.code_article,
            record.designation,
        );
        match record.categorie {
            Some(category) => article.with_category(CategoryId::new(category.into_id())),
            None => article,
        }
    }
}
