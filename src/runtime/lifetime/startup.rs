use crate::models::constraints::entities::ConstraintKind;
use crate::models::constraints::requests::CreateConstraintRequest;
use crate::models::rules::requests::CreateRuleRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 默认规则播种数据：规则名、描述、(约束路由键, 阈值, 类别, 描述)
const DEFAULT_RULES: &[(&str, &str, &[(&str, i64, ConstraintKind, &str)])] = &[
    (
        "Platform regular",
        "Log in regularly and keep assignments flowing",
        &[
            ("course/login", 10, ConstraintKind::Action, "Log in 10 times"),
            (
                "assignment/artifact/submitted",
                3,
                ConstraintKind::Action,
                "Submit 3 artifacts",
            ),
        ],
    ),
    (
        "Dedicated reviewer",
        "Complete peer reviews consistently",
        &[(
            "assignment/review/completed",
            5,
            ConstraintKind::Action,
            "Complete 5 peer reviews",
        )],
    ),
];

/// 初始化默认规则集
/// 规则表为空时播种内置的默认规则及其约束
async fn seed_default_rules(storage: &Arc<dyn Storage>) {
    match storage.count_rules().await {
        Ok(count) if count > 0 => {
            debug!("Rules table already has {} rule(s), skipping seed", count);
            return;
        }
        Ok(_) => {
            info!("No rules found in database, seeding default rule set...");
        }
        Err(e) => {
            warn!("Failed to count rules: {}, skipping rule seed", e);
            return;
        }
    }

    for (rule_name, rule_description, constraint_specs) in DEFAULT_RULES {
        let rule = match storage
            .create_rule(CreateRuleRequest {
                name: rule_name.to_string(),
                description: Some(rule_description.to_string()),
                is_default: Some(true),
            })
            .await
        {
            Ok(rule) => rule,
            Err(e) => {
                warn!("Failed to seed rule '{}': {}", rule_name, e);
                continue;
            }
        };

        for (url, threshold, kind, description) in *constraint_specs {
            // 约束可能已被其他默认规则建过，复用已有的行
            let constraint = match storage.get_constraint_by_url(url).await {
                Ok(Some(constraint)) => Ok(constraint),
                Ok(None) => {
                    storage
                        .create_constraint(CreateConstraintRequest {
                            url: url.to_string(),
                            threshold: *threshold,
                            description: Some(description.to_string()),
                            kind: Some(*kind),
                        })
                        .await
                }
                Err(e) => Err(e),
            };

            match constraint {
                Ok(constraint) => {
                    if let Err(e) = storage
                        .attach_constraint_to_rule(rule.id, constraint.id)
                        .await
                    {
                        warn!(
                            "Failed to attach constraint '{}' to rule '{}': {}",
                            url, rule_name, e
                        );
                    }
                }
                Err(e) => {
                    warn!("Failed to seed constraint '{}': {}", url, e);
                }
            }
        }

        info!("Default rule '{}' seeded", rule_name);
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化和默认规则播种
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认规则集（如果需要）
    seed_default_rules(&storage).await;

    StartupContext { storage }
}
