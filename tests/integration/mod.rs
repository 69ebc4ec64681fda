mod edge_cases;
mod real_world_articles;
