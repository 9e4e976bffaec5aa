// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use serde_json::{Value as JsonValue, json};
use tadpole::{Dataset, DeriveConfig, ExpandMode, FieldDef, Model, Type, Value, col, format, lit, when};

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

fn users() -> Vec<JsonValue> {
	let companies = json!([{"name": "Stuff Co", "id": 1234}, {"name": "Another Co", "id": 5678}]);
	vec![
		json!({"id": 3299, "type": "member", "attributes": {"name": "user1", "role": "admin", "companies": companies}}),
		json!({"id": 4903, "type": "member", "attributes": {"name": "user2", "role": "editor", "companies": companies}}),
		json!({"id": 4532, "type": "visitor", "attributes": {"name": "user3", "role": "reader", "companies": companies}}),
	]
}

fn people() -> Model {
	Model::builder("People")
		.field("type", Type::Utf8)
		.field("name", FieldDef::new(Type::Utf8).candidate(col("attributes.name")))
		.field("email", FieldDef::new(Type::Utf8).candidate(format("{}@tadpoles.com", [col("name")])))
		.build()
		.unwrap()
}

fn expand() -> DeriveConfig {
	DeriveConfig::default().expand(ExpandMode::UnnestExplode)
}

#[test]
fn test_users_unnest_explode() {
	init_tracing();
	let model = Model::builder("Users")
		.field("user_id", FieldDef::new(Type::Int8).candidate(col("id")).primary_key())
		.field("type", Type::Utf8)
		.field("name", FieldDef::new(Type::Utf8).candidate(col("attributes.name")))
		.field("role", FieldDef::new(Type::Utf8).candidate(col("attributes.role")))
		.field("email", FieldDef::new(Type::Utf8).candidate(format("{}@tadpoles.com", [col("name")])))
		.field("company_name", FieldDef::new(Type::Utf8).candidate(col("attributes.companies.name")))
		.field("company_id", FieldDef::new(Type::Int8).candidate(col("attributes.companies.id")))
		.build()
		.unwrap();

	let dataset = Dataset::new(Arc::new(model), users(), expand()).unwrap();
	let result = dataset.collect().unwrap();

	assert_eq!(result.names(), vec!["company_id", "company_name", "email", "name", "role", "type", "user_id"]);
	assert_eq!(result.row_count(), 6);
	assert_eq!(dataset.primary_key(), vec!["user_id"]);

	assert_eq!(result.to_records()[0], json!({
		"company_id": 1234,
		"company_name": "Stuff Co",
		"email": "user1@tadpoles.com",
		"name": "user1",
		"role": "admin",
		"type": "member",
		"user_id": 3299
	}));
	assert_eq!(result.to_records()[5], json!({
		"company_id": 5678,
		"company_name": "Another Co",
		"email": "user3@tadpoles.com",
		"name": "user3",
		"role": "reader",
		"type": "visitor",
		"user_id": 4532
	}));
}

#[test]
fn test_inherited_fields() {
	let parent = people();
	let model = Model::builder("Users")
		.extends(&parent)
		.field("user_id", FieldDef::new(Type::Int8).candidate(col("id")))
		.field("role", FieldDef::new(Type::Utf8).candidate(col("attributes.role")))
		.field("company_name", FieldDef::new(Type::Utf8).candidate(col("attributes.companies.name")))
		.field("company_id", FieldDef::new(Type::Int8).candidate(col("attributes.companies.id")))
		.build()
		.unwrap();

	let base = Dataset::new(Arc::new(parent), users(), expand()).unwrap().collect().unwrap();
	assert_eq!(base.names(), vec!["email", "name", "type"]);
	assert_eq!(base.row_count(), 6);

	let result = Dataset::new(Arc::new(model), users(), expand()).unwrap().collect().unwrap();
	assert_eq!(result.names(), vec!["company_id", "company_name", "email", "name", "role", "type", "user_id"]);
	assert_eq!(result.column("email").unwrap().data.values().collect::<Vec<_>>(), base
		.column("email")
		.unwrap()
		.data
		.values()
		.collect::<Vec<_>>());
}

#[test]
fn test_events_from_two_sources() {
	let model = Model::builder("Events")
		.field("event_id", Type::Utf8)
		.field(
			"event_type",
			FieldDef::new(Type::Utf8)
				.candidate(col("message.event_type").replace(lit("com.amazon.rum."), lit(""))),
		)
		.field(
			"email",
			FieldDef::new(Type::Utf8)
				.candidate(col("message.metadata.email"))
				.candidate(col("event_details.user.email")),
		)
		.field(
			"event_flag",
			FieldDef::new(Type::Boolean)
				.candidate(when(col("event_type").eq(lit("login"))).then(lit(true)).otherwise(lit(false))),
		)
		.build()
		.unwrap();
	let model = Arc::new(model);
	let config = DeriveConfig::default().expand(ExpandMode::Unnest);

	let web = Dataset::new(
		model.clone(),
		vec![json!({
			"event_id": "e1",
			"message": {"event_type": "com.amazon.rum.login", "metadata": {"email": "a@x.com"}}
		})],
		config.clone(),
	)
	.unwrap();
	let mobile = Dataset::new(
		model,
		vec![json!({
			"event_id": "e2",
			"message": {"event_type": "com.amazon.rum.click"},
			"event_details": {"user": {"email": "b@x.com"}}
		})],
		config,
	)
	.unwrap();

	let web_rows = web.collect().unwrap();
	assert_eq!(web_rows.row(0), vec![
		Value::utf8("a@x.com"),
		Value::bool(true),
		Value::utf8("e1"),
		Value::utf8("login")
	]);

	let mobile_rows = mobile.collect().unwrap();
	assert_eq!(mobile_rows.row(0), vec![
		Value::utf8("b@x.com"),
		Value::bool(false),
		Value::utf8("e2"),
		Value::utf8("click")
	]);

	// both sources together: the first satisfiable candidate is the web one,
	// which is null for the mobile row
	let all = (&web + &mobile).unwrap().collect().unwrap();
	assert_eq!(all.row_count(), 2);
	assert_eq!(all.column("email").unwrap().data.values().collect::<Vec<_>>(), vec![
		Value::utf8("a@x.com"),
		Value::Undefined
	]);
}
