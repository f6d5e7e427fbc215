//! # apigw-schema
//!
//! Rule set for the `apiGatewayServiceProxies` list of a serverless
//! configuration: API Gateway endpoints proxying straight to Kinesis, S3,
//! SNS, SQS or DynamoDB.
//!
//! ```
//! use apigw_schema::ProxyValidator;
//! use serde_json::json;
//!
//! let proxies = json!([{
//!     "dynamodb": {
//!         "path": "/dynamodb",
//!         "method": "post",
//!         "tableName": {"Ref": "MyTable"},
//!     }
//! }]);
//!
//! let errors = ProxyValidator::new().validate(&proxies).unwrap_err();
//! assert!(errors.messages()[0].starts_with("\"hashKey\" is required when you define post"));
//! ```
//!
//! Individual field rules are public so other tooling can reuse them:
//! [`common`], [`refs`], [`dynamodb`], [`proxies`].

pub mod common;
pub mod dynamodb;
pub mod kind;
pub mod proxies;
pub mod refs;
pub mod validator;

pub use kind::{ProxyKind, UnknownProxyKind};
pub use validator::{EntryShape, ProxyValidator};
