mod deployment_flow_test;
mod finder_test;
