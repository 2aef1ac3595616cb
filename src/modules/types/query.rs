//! Supported query kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Query kinds a looking glass deployment can support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// BGP route lookup for a prefix
    BgpRoute,
    /// BGP community lookup
    BgpCommunity,
    /// BGP AS path lookup
    BgpAspath,
    /// ICMP echo to a target
    Ping,
    /// Hop-by-hop path trace to a target
    Traceroute,
}

impl QueryKind {
    /// All query kinds, in the order they appear in documentation
    pub const ALL: [QueryKind; 5] = [
        QueryKind::BgpRoute,
        QueryKind::BgpCommunity,
        QueryKind::BgpAspath,
        QueryKind::Ping,
        QueryKind::Traceroute,
    ];

    /// Wire name of this query kind
    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::BgpRoute => "bgp_route",
            QueryKind::BgpCommunity => "bgp_community",
            QueryKind::BgpAspath => "bgp_aspath",
            QueryKind::Ping => "ping",
            QueryKind::Traceroute => "traceroute",
        }
    }

    /// Default human-readable label for this query kind
    pub fn display_name(&self) -> &'static str {
        match self {
            QueryKind::BgpRoute => "BGP Route",
            QueryKind::BgpCommunity => "BGP Community",
            QueryKind::BgpAspath => "BGP AS Path",
            QueryKind::Ping => "Ping",
            QueryKind::Traceroute => "Traceroute",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bgp_route" => Ok(QueryKind::BgpRoute),
            "bgp_community" => Ok(QueryKind::BgpCommunity),
            "bgp_aspath" => Ok(QueryKind::BgpAspath),
            "ping" => Ok(QueryKind::Ping),
            "traceroute" => Ok(QueryKind::Traceroute),
            other => Err(format!("Unknown query kind: {}", other)),
        }
    }
}
